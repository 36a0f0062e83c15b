pub mod sellers;
