pub mod batch;
pub mod check;
pub mod init;
pub mod interactive;
pub mod options;
pub mod render;
pub mod simulate;
