mod cv_exporter_json;
mod cv_exporter_log;
mod picture_encoder_data_url;

pub use cv_exporter_json::JsonFileCvExporter;
pub use cv_exporter_log::LogCvExporter;
pub use picture_encoder_data_url::DataUrlEncoder;
