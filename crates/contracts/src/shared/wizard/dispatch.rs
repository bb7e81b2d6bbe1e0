use super::catalog::{WizardStoreId, WizardView};
use super::kind::WizardKind;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// View + store pair a wizard kind resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardEntry<V, S> {
    pub view: V,
    pub store: S,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchTableError {
    #[error("wizard kind '{0}' is registered more than once")]
    DuplicateKind(WizardKind),
}

/// Caller-supplied wizard parameters (everything except the close callback).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardParams {
    pub is_open: bool,
    pub wizard_type: String,
    #[serde(default)]
    pub input: serde_json::Value,
    #[serde(default)]
    pub backdrop: bool,
    #[serde(rename = "displayCTA", default)]
    pub display_cta: bool,
}

impl WizardParams {
    pub fn open(kind: WizardKind) -> Self {
        Self {
            is_open: true,
            wizard_type: kind.as_str().to_string(),
            input: serde_json::Value::Null,
            backdrop: true,
            display_cta: false,
        }
    }

    pub fn with_input(mut self, input: serde_json::Value) -> Self {
        self.input = input;
        self
    }
}

/// Outcome of a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardResolution<'t, V, S> {
    /// Wizard is not open; render nothing.
    Closed,
    /// `wizard_type` is not in the table; carries the literal value.
    Unknown { wizard_type: String },
    /// Render `entry.view` bound to `entry.store`.
    Render {
        kind: WizardKind,
        entry: &'t WizardEntry<V, S>,
    },
}

/// Immutable mapping from wizard kind to view + store.
///
/// Keys are unique (enforced at construction); several kinds may share a view
/// or a store.
#[derive(Debug, Clone)]
pub struct WizardDispatchTable<V, S> {
    entries: HashMap<WizardKind, WizardEntry<V, S>>,
}

impl<V, S> WizardDispatchTable<V, S> {
    pub fn from_entries(
        entries: impl IntoIterator<Item = (WizardKind, WizardEntry<V, S>)>,
    ) -> Result<Self, DispatchTableError> {
        let mut map = HashMap::new();
        for (kind, entry) in entries {
            if map.insert(kind, entry).is_some() {
                return Err(DispatchTableError::DuplicateKind(kind));
            }
        }
        Ok(Self { entries: map })
    }

    pub fn get(&self, kind: WizardKind) -> Option<&WizardEntry<V, S>> {
        self.entries.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = WizardKind> + '_ {
        self.entries.keys().copied()
    }

    pub fn resolve(&self, params: &WizardParams) -> WizardResolution<'_, V, S> {
        if !params.is_open {
            return WizardResolution::Closed;
        }
        match WizardKind::from_name(&params.wizard_type)
            .and_then(|kind| self.entries.get(&kind).map(|entry| (kind, entry)))
        {
            Some((kind, entry)) => WizardResolution::Render { kind, entry },
            None => WizardResolution::Unknown {
                wizard_type: params.wizard_type.clone(),
            },
        }
    }
}

pub type StandardDispatchTable = WizardDispatchTable<WizardView, WizardStoreId>;

const STANDARD_ENTRIES: [(WizardKind, WizardView, WizardStoreId); 20] = [
    (WizardKind::CreateApp, WizardView::ApplicationUpload, WizardStoreId::ApplicationUpload),
    (
        WizardKind::CreateDriverArtifact,
        WizardView::MarketArtifactUpload,
        WizardStoreId::ArtifactUpload,
    ),
    (WizardKind::DeployApp, WizardView::ApplicationUpload, WizardStoreId::ApplicationUpload),
    (WizardKind::CreateArtifactRc, WizardView::ArtifactUpload, WizardStoreId::ArtifactUpload),
    (WizardKind::CreateLibraryRc, WizardView::LibraryUpload, WizardStoreId::ArtifactUpload),
    (
        WizardKind::CreatePluginArtifact,
        WizardView::MarketHydratorPluginUpload,
        WizardStoreId::ArtifactUpload,
    ),
    (
        WizardKind::CreatePluginArtifactRc,
        WizardView::PluginArtifactUpload,
        WizardStoreId::ArtifactUpload,
    ),
    (WizardKind::CreateAppRc, WizardView::ApplicationUpload, WizardStoreId::ArtifactUpload),
    (WizardKind::Informational, WizardView::Informational, WizardStoreId::Informational),
    (WizardKind::LoadDatapack, WizardView::UploadData, WizardStoreId::UploadData),
    (WizardKind::LoadDatapackUsecase, WizardView::UploadDataUsecase, WizardStoreId::UploadData),
    (
        WizardKind::CreatePipeline,
        WizardView::PublishPipelineUsecase,
        WizardStoreId::PublishPipeline,
    ),
    (WizardKind::CreatePipelineDraft, WizardView::PublishPipeline, WizardStoreId::PublishPipeline),
    (WizardKind::AddNamespace, WizardView::AddNamespace, WizardStoreId::AddNamespace),
    (WizardKind::CreateStream, WizardView::StreamCreate, WizardStoreId::CreateStream),
    (WizardKind::OneStepDeployApp, WizardView::OneStepDeployApp, WizardStoreId::OneStepDeploy),
    (
        WizardKind::OneStepDeployAppUsecase,
        WizardView::OneStepDeployAppUsecase,
        WizardStoreId::OneStepDeploy,
    ),
    (
        WizardKind::OneStepDeployPlugin,
        WizardView::OneStepDeployPlugin,
        WizardStoreId::OneStepDeploy,
    ),
    (
        WizardKind::OneStepDeployPluginUsecase,
        WizardView::OneStepDeployPluginUsecase,
        WizardStoreId::OneStepDeploy,
    ),
    (
        WizardKind::CreateMicroserviceRc,
        WizardView::MicroserviceUpload,
        WizardStoreId::MicroserviceUpload,
    ),
];

/// Builds the console's wizard table.
pub fn standard_table() -> Result<StandardDispatchTable, DispatchTableError> {
    WizardDispatchTable::from_entries(
        STANDARD_ENTRIES
            .iter()
            .map(|&(kind, view, store)| (kind, WizardEntry { view, store })),
    )
}

/// Falls back to an empty table, so every wizard type renders as unknown.
fn or_empty(built: Result<StandardDispatchTable, DispatchTableError>) -> StandardDispatchTable {
    built.unwrap_or_else(|e| {
        log::error!("standard wizard table rejected, no wizard will open: {}", e);
        WizardDispatchTable {
            entries: HashMap::new(),
        }
    })
}

static STANDARD_TABLE: Lazy<StandardDispatchTable> = Lazy::new(|| or_empty(standard_table()));

/// Process-wide standard table, built on first use.
pub fn standard() -> &'static StandardDispatchTable {
    &STANDARD_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_resolves_to_its_pair() {
        let table = standard();
        for &(kind, view, store) in STANDARD_ENTRIES.iter() {
            match table.resolve(&WizardParams::open(kind)) {
                WizardResolution::Render { kind: resolved, entry } => {
                    assert_eq!(resolved, kind);
                    assert_eq!(entry.view, view);
                    assert_eq!(entry.store, store);
                }
                other => panic!("{} resolved to {:?}", kind, other),
            }
        }
    }

    #[test]
    fn test_closed_renders_nothing() {
        let table = standard();
        for wizard_type in ["create_app", "nonexistent", ""] {
            let params = WizardParams {
                is_open: false,
                wizard_type: wizard_type.to_string(),
                ..Default::default()
            };
            assert_eq!(table.resolve(&params), WizardResolution::Closed);
        }
    }

    #[test]
    fn test_unknown_carries_literal_type() {
        let params = WizardParams {
            is_open: true,
            wizard_type: "nonexistent".to_string(),
            ..Default::default()
        };
        match standard().resolve(&params) {
            WizardResolution::Unknown { wizard_type } => {
                assert!(wizard_type.contains("nonexistent"))
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_standard_table_covers_every_kind_once() {
        let table = standard_table().unwrap();
        assert_eq!(table.len(), WizardKind::ALL.len());
        for kind in WizardKind::ALL {
            assert!(table.get(kind).is_some(), "missing {}", kind);
        }
    }

    #[test]
    fn test_shared_view_with_distinct_stores() {
        let table = standard();
        let app = table.get(WizardKind::CreateApp).unwrap();
        let app_rc = table.get(WizardKind::CreateAppRc).unwrap();
        assert_eq!(app.view, app_rc.view);
        assert_ne!(app.store, app_rc.store);
    }

    #[test]
    fn test_duplicate_kind_rejected() {
        let result = WizardDispatchTable::from_entries([
            (WizardKind::CreateApp, WizardEntry { view: 1, store: "a" }),
            (WizardKind::CreateApp, WizardEntry { view: 2, store: "b" }),
        ]);
        assert_eq!(
            result.unwrap_err(),
            DispatchTableError::DuplicateKind(WizardKind::CreateApp)
        );
    }

    #[test]
    fn test_rejected_standard_table_falls_back_to_empty() {
        let rejected = WizardDispatchTable::from_entries([
            (
                WizardKind::CreateApp,
                WizardEntry {
                    view: WizardView::ApplicationUpload,
                    store: WizardStoreId::ApplicationUpload,
                },
            ),
            (
                WizardKind::CreateApp,
                WizardEntry {
                    view: WizardView::ArtifactUpload,
                    store: WizardStoreId::ArtifactUpload,
                },
            ),
        ]);
        let table = or_empty(rejected);
        assert!(table.is_empty());
        assert_eq!(
            table.resolve(&WizardParams::open(WizardKind::CreateApp)),
            WizardResolution::Unknown {
                wizard_type: "create_app".to_string()
            }
        );

        assert_eq!(or_empty(standard_table()).len(), WizardKind::ALL.len());
    }

    #[test]
    fn test_substituted_table() {
        let table = WizardDispatchTable::from_entries([(
            WizardKind::Informational,
            WizardEntry {
                view: "info-view",
                store: "info-store",
            },
        )])
        .unwrap();

        match table.resolve(&WizardParams::open(WizardKind::Informational)) {
            WizardResolution::Render { entry, .. } => {
                assert_eq!(entry.view, "info-view");
                assert_eq!(entry.store, "info-store");
            }
            other => panic!("unexpected {:?}", other),
        }

        // A known kind missing from the substituted table is reported as unknown.
        assert_eq!(
            table.resolve(&WizardParams::open(WizardKind::CreateApp)),
            WizardResolution::Unknown {
                wizard_type: "create_app".to_string()
            }
        );
    }

    #[test]
    fn test_params_deserialize_from_props_json() {
        let params: WizardParams = serde_json::from_str(
            r#"{"isOpen":true,"wizardType":"add_namespace","backdrop":false,"displayCTA":true}"#,
        )
        .unwrap();
        assert!(params.is_open);
        assert!(params.display_cta);
        assert!(!params.backdrop);
        assert_eq!(params.input, serde_json::Value::Null);
    }
}
