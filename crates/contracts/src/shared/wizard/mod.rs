pub mod catalog;
pub mod dispatch;
pub mod kind;

pub use catalog::{ViewLoadError, WizardDescriptor, WizardStep, WizardStoreId, WizardView};
pub use dispatch::{
    standard, standard_table, DispatchTableError, StandardDispatchTable, WizardDispatchTable,
    WizardEntry, WizardParams, WizardResolution,
};
pub use kind::WizardKind;
