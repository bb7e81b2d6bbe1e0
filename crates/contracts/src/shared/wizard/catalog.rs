use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A wizard view could not be materialized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewLoadError {
    #[error("wizard view {0:?} is not available")]
    Unavailable(WizardView),
    #[error("failed to load wizard view {view:?}: {reason}")]
    Failed { view: WizardView, reason: String },
}

/// View component a wizard kind is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardView {
    ApplicationUpload,
    MarketArtifactUpload,
    ArtifactUpload,
    LibraryUpload,
    MarketHydratorPluginUpload,
    PluginArtifactUpload,
    Informational,
    UploadData,
    UploadDataUsecase,
    PublishPipeline,
    PublishPipelineUsecase,
    AddNamespace,
    StreamCreate,
    OneStepDeployApp,
    OneStepDeployAppUsecase,
    OneStepDeployPlugin,
    OneStepDeployPluginUsecase,
    MicroserviceUpload,
}

/// State container family backing one or more wizard kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardStoreId {
    ApplicationUpload,
    ArtifactUpload,
    Informational,
    UploadData,
    PublishPipeline,
    AddNamespace,
    CreateStream,
    OneStepDeploy,
    MicroserviceUpload,
}

impl WizardStoreId {
    pub const ALL: [WizardStoreId; 9] = [
        WizardStoreId::ApplicationUpload,
        WizardStoreId::ArtifactUpload,
        WizardStoreId::Informational,
        WizardStoreId::UploadData,
        WizardStoreId::PublishPipeline,
        WizardStoreId::AddNamespace,
        WizardStoreId::CreateStream,
        WizardStoreId::OneStepDeploy,
        WizardStoreId::MicroserviceUpload,
    ];
}

/// A single step of a wizard: a label and the store fields it edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardStep {
    pub label: &'static str,
    pub fields: &'static [&'static str],
}

/// Static description of a wizard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardDescriptor {
    pub title: &'static str,
    pub steps: &'static [WizardStep],
}

impl WizardDescriptor {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn is_last_step(&self, index: usize) -> bool {
        index + 1 >= self.steps.len()
    }
}

const ARTIFACT_UPLOAD_STEPS: &[WizardStep] = &[
    WizardStep {
        label: "Upload",
        fields: &["jar_file"],
    },
    WizardStep {
        label: "Configure",
        fields: &["name", "version", "classname", "parents"],
    },
];

const APPLICATION_UPLOAD_STEPS: &[WizardStep] = &[WizardStep {
    label: "Upload",
    fields: &["jar_file"],
}];

const ONE_STEP_DEPLOY_STEPS: &[WizardStep] = &[WizardStep {
    label: "Deploy",
    fields: &["name"],
}];

const UPLOAD_DATA_STEPS: &[WizardStep] = &[
    WizardStep {
        label: "View Data",
        fields: &[],
    },
    WizardStep {
        label: "Select Destination",
        fields: &["destination_type", "destination_name"],
    },
];

const PUBLISH_PIPELINE_STEPS: &[WizardStep] = &[
    WizardStep {
        label: "Pipeline Metadata",
        fields: &["name", "description"],
    },
];

impl WizardView {
    pub fn descriptor(&self) -> WizardDescriptor {
        match self {
            WizardView::ApplicationUpload => WizardDescriptor {
                title: "Upload Application",
                steps: APPLICATION_UPLOAD_STEPS,
            },
            WizardView::MarketArtifactUpload => WizardDescriptor {
                title: "Upload Driver",
                steps: ARTIFACT_UPLOAD_STEPS,
            },
            WizardView::ArtifactUpload => WizardDescriptor {
                title: "Upload Artifact",
                steps: ARTIFACT_UPLOAD_STEPS,
            },
            WizardView::LibraryUpload => WizardDescriptor {
                title: "Upload Library",
                steps: ARTIFACT_UPLOAD_STEPS,
            },
            WizardView::MarketHydratorPluginUpload => WizardDescriptor {
                title: "Upload Pipeline Plugin",
                steps: ARTIFACT_UPLOAD_STEPS,
            },
            WizardView::PluginArtifactUpload => WizardDescriptor {
                title: "Upload Plugin",
                steps: &[
                    WizardStep {
                        label: "Upload",
                        fields: &["jar_file"],
                    },
                    WizardStep {
                        label: "Plugin Configuration",
                        fields: &["json_file"],
                    },
                    WizardStep {
                        label: "Configure",
                        fields: &["name", "version", "parents"],
                    },
                ],
            },
            WizardView::Informational => WizardDescriptor {
                title: "Information",
                steps: &[WizardStep {
                    label: "Details",
                    fields: &[],
                }],
            },
            WizardView::UploadData => WizardDescriptor {
                title: "Load Data",
                steps: UPLOAD_DATA_STEPS,
            },
            WizardView::UploadDataUsecase => WizardDescriptor {
                title: "Load Data (Usecase)",
                steps: UPLOAD_DATA_STEPS,
            },
            WizardView::PublishPipeline => WizardDescriptor {
                title: "Create Pipeline Draft",
                steps: PUBLISH_PIPELINE_STEPS,
            },
            WizardView::PublishPipelineUsecase => WizardDescriptor {
                title: "Create Pipeline",
                steps: PUBLISH_PIPELINE_STEPS,
            },
            WizardView::AddNamespace => WizardDescriptor {
                title: "Add Namespace",
                steps: &[
                    WizardStep {
                        label: "General Information",
                        fields: &["name", "description"],
                    },
                    WizardStep {
                        label: "Namespace Mapping",
                        fields: &["hdfs_root_directory", "hbase_namespace", "hive_database"],
                    },
                    WizardStep {
                        label: "Security",
                        fields: &["principal", "keytab_uri"],
                    },
                    WizardStep {
                        label: "Preferences",
                        fields: &["preferences"],
                    },
                ],
            },
            WizardView::StreamCreate => WizardDescriptor {
                title: "Create Stream",
                steps: &[
                    WizardStep {
                        label: "General",
                        fields: &["name", "description", "ttl"],
                    },
                    WizardStep {
                        label: "Schema",
                        fields: &["format", "schema"],
                    },
                    WizardStep {
                        label: "Trigger",
                        fields: &["mb_trigger"],
                    },
                    WizardStep {
                        label: "Upload Data",
                        fields: &["file"],
                    },
                ],
            },
            WizardView::OneStepDeployApp => WizardDescriptor {
                title: "Deploy Application",
                steps: ONE_STEP_DEPLOY_STEPS,
            },
            WizardView::OneStepDeployAppUsecase => WizardDescriptor {
                title: "Deploy Application (Usecase)",
                steps: ONE_STEP_DEPLOY_STEPS,
            },
            WizardView::OneStepDeployPlugin => WizardDescriptor {
                title: "Deploy Plugin",
                steps: ONE_STEP_DEPLOY_STEPS,
            },
            WizardView::OneStepDeployPluginUsecase => WizardDescriptor {
                title: "Deploy Plugin (Usecase)",
                steps: ONE_STEP_DEPLOY_STEPS,
            },
            WizardView::MicroserviceUpload => WizardDescriptor {
                title: "Create Microservice",
                steps: &[
                    WizardStep {
                        label: "General Information",
                        fields: &["instance_name", "description", "version"],
                    },
                    WizardStep {
                        label: "Upload",
                        fields: &["jar_file"],
                    },
                    WizardStep {
                        label: "Configure",
                        fields: &["instances", "vcores", "memory", "ethreshold"],
                    },
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_load_error_names_the_view() {
        let unavailable = ViewLoadError::Unavailable(WizardView::StreamCreate);
        assert_eq!(unavailable.to_string(), "wizard view StreamCreate is not available");

        let failed = ViewLoadError::Failed {
            view: WizardView::UploadData,
            reason: "chunk fetch failed".to_string(),
        };
        assert_eq!(
            failed.to_string(),
            "failed to load wizard view UploadData: chunk fetch failed"
        );
    }

    #[test]
    fn test_descriptor_last_step() {
        let descriptor = WizardView::StreamCreate.descriptor();
        assert_eq!(descriptor.step_count(), 4);
        assert!(!descriptor.is_last_step(0));
        assert!(descriptor.is_last_step(3));
    }

    #[test]
    fn test_single_step_descriptor() {
        let descriptor = WizardView::OneStepDeployApp.descriptor();
        assert!(descriptor.is_last_step(0));
    }
}
