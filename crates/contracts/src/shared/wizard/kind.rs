use serde::{Deserialize, Serialize};
use std::fmt;

/// Wizard flow identifier.
///
/// The set is closed: every kind the console can open is listed here and has
/// exactly one entry in the standard dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardKind {
    CreateApp,
    CreateDriverArtifact,
    DeployApp,
    CreateArtifactRc,
    CreateLibraryRc,
    CreatePluginArtifact,
    CreatePluginArtifactRc,
    CreateAppRc,
    Informational,
    LoadDatapack,
    LoadDatapackUsecase,
    CreatePipeline,
    CreatePipelineDraft,
    AddNamespace,
    CreateStream,
    OneStepDeployApp,
    OneStepDeployAppUsecase,
    OneStepDeployPlugin,
    OneStepDeployPluginUsecase,
    CreateMicroserviceRc,
}

impl WizardKind {
    pub const ALL: [WizardKind; 20] = [
        WizardKind::CreateApp,
        WizardKind::CreateDriverArtifact,
        WizardKind::DeployApp,
        WizardKind::CreateArtifactRc,
        WizardKind::CreateLibraryRc,
        WizardKind::CreatePluginArtifact,
        WizardKind::CreatePluginArtifactRc,
        WizardKind::CreateAppRc,
        WizardKind::Informational,
        WizardKind::LoadDatapack,
        WizardKind::LoadDatapackUsecase,
        WizardKind::CreatePipeline,
        WizardKind::CreatePipelineDraft,
        WizardKind::AddNamespace,
        WizardKind::CreateStream,
        WizardKind::OneStepDeployApp,
        WizardKind::OneStepDeployAppUsecase,
        WizardKind::OneStepDeployPlugin,
        WizardKind::OneStepDeployPluginUsecase,
        WizardKind::CreateMicroserviceRc,
    ];

    /// Wire name used in props and URLs (e.g. "create_app").
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardKind::CreateApp => "create_app",
            WizardKind::CreateDriverArtifact => "create_driver_artifact",
            WizardKind::DeployApp => "deploy_app",
            WizardKind::CreateArtifactRc => "create_artifact_rc",
            WizardKind::CreateLibraryRc => "create_library_rc",
            WizardKind::CreatePluginArtifact => "create_plugin_artifact",
            WizardKind::CreatePluginArtifactRc => "create_plugin_artifact_rc",
            WizardKind::CreateAppRc => "create_app_rc",
            WizardKind::Informational => "informational",
            WizardKind::LoadDatapack => "load_datapack",
            WizardKind::LoadDatapackUsecase => "load_datapack_usecase",
            WizardKind::CreatePipeline => "create_pipeline",
            WizardKind::CreatePipelineDraft => "create_pipeline_draft",
            WizardKind::AddNamespace => "add_namespace",
            WizardKind::CreateStream => "create_stream",
            WizardKind::OneStepDeployApp => "one_step_deploy_app",
            WizardKind::OneStepDeployAppUsecase => "one_step_deploy_app_usecase",
            WizardKind::OneStepDeployPlugin => "one_step_deploy_plugin",
            WizardKind::OneStepDeployPluginUsecase => "one_step_deploy_plugin_usecase",
            WizardKind::CreateMicroserviceRc => "create_microservice_rc",
        }
    }

    /// Returns `None` for names outside the closed set.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == name)
    }
}

impl fmt::Display for WizardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(WizardKind::from_name("create_app"), Some(WizardKind::CreateApp));
        assert_eq!(
            WizardKind::from_name("one_step_deploy_plugin_usecase"),
            Some(WizardKind::OneStepDeployPluginUsecase)
        );
        assert_eq!(WizardKind::from_name("nonexistent"), None);
        assert_eq!(WizardKind::from_name("Create_App"), None);
    }

    #[test]
    fn test_serde_name_matches_as_str() {
        for kind in WizardKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }
}
