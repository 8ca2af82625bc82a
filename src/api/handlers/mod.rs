pub mod hall;
pub mod health;
pub mod movie;
pub mod screening;
