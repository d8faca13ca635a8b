pub mod result_writer;
pub mod selection_reader;
