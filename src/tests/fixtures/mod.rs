pub mod events;
pub mod organizers;
