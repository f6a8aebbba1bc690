pub mod remote_integration;
pub mod ssh_integration;
pub mod status_response;

pub use self::remote_integration::RemoteIntegration;
pub use self::ssh_integration::SshIntegration;
pub use self::status_response::StatusFormat;
