pub mod dolar_api;
pub mod fallback;
