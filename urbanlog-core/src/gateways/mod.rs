pub mod email;
pub mod geoloc;
