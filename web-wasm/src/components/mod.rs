pub mod escort_card;
pub mod event_header;
pub mod loading;
pub mod name_search;
