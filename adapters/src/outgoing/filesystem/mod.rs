pub mod image_file_store;
