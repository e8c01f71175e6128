pub mod crunchbase;
pub mod droid;
pub mod report_writer;
pub mod securitytrails;

pub use crunchbase::*;
pub use droid::*;
pub use report_writer::*;
pub use securitytrails::*;
