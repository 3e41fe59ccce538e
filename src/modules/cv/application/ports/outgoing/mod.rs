pub mod cv_exporter;
pub mod picture_encoder;

pub use cv_exporter::{CvExportError, CvExporter};
pub use picture_encoder::{PictureEncodeError, PictureEncoder};
