// Form-data model: the single record the rest of the app consumes.
// Mutated field-by-field by the wizard, handed immutably to the composer.

pub mod form;

pub use form::FormData;
