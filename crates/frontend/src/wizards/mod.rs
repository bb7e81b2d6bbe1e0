pub mod abstract_wizard;
pub mod launcher;
pub mod loader;
pub mod step_wizard;
pub mod store;

pub use abstract_wizard::AbstractWizard;
pub use launcher::WizardLauncher;
pub use loader::{StepWizardLoader, ViewLoader, WizardViewFn, WizardViewProps};
pub use store::{WizardState, WizardStore, WizardStores};
