pub mod code_generator;
pub mod db_error;
pub mod url_validator;
