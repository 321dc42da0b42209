pub mod numeric_input;
