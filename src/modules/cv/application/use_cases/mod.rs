pub mod cv_form;
