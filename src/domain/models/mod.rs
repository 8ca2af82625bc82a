pub mod hall;
pub mod movie;
pub mod screening;
