pub mod rust_lomuto;
pub mod rust_lomuto_c;
pub mod rust_lomuto_raw;
pub mod rust_std;
