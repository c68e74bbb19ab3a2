mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod records;
pub use records::{reload, run_mutation, RecordsView};
