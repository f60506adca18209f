pub mod form_fields;
pub mod stat_card;
pub mod toast;
