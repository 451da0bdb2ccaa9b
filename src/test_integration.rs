use crate::{
    export_decision, resolve, AddonConfig, ClassHierarchy, ExportDecision, ExportFlag,
    ResolveError, SceneObject,
};

/// Integration tests for the full addon-to-exporter pipeline
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exporter_pass_over_a_scene() {
        let (config, hierarchy) = create_test_setup();

        // What an exporter sees: one object per class, defaults everywhere.
        let scene = [
            SceneObject::new("Land_New_WiredFence_5m_F"),
            SceneObject::new("Car_F"),
            SceneObject::new("CamoNet_BLUFOR_F"),
            SceneObject::excluded("TargetBootcampHuman_F"),
        ];

        let exported: Vec<&str> = scene
            .iter()
            .filter(|o| {
                export_decision(o, &hierarchy, &config.rules)
                    .expect("scene classes are all known")
                    .is_exportable()
            })
            .map(|o| o.class_name.as_str())
            .collect();

        // The vehicle inherits the AllVehicles denial; the ticked target
        // dummy is dropped despite its class-level +1.
        assert_eq!(exported, vec!["Land_New_WiredFence_5m_F", "CamoNet_BLUFOR_F"]);
    }

    #[test]
    fn test_stale_scene_data_surfaces_as_error() {
        let (config, hierarchy) = create_test_setup();

        let stale = SceneObject::new("Land_RemovedInThisVersion_F");
        match export_decision(&stale, &hierarchy, &config.rules) {
            Err(ResolveError::UnknownClass(name)) => {
                assert_eq!(name, "Land_RemovedInThisVersion_F");
            }
            other => panic!("Expected UnknownClass error, got: {:?}", other),
        }
    }

    #[test]
    fn test_config_survives_host_round_trip() {
        let (config, hierarchy) = create_test_setup();

        // The host loader consumes JSON; resolution must be unaffected.
        let json = config.to_json().unwrap();
        let reloaded: AddonConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            resolve("Car_F", &hierarchy, &reloaded.rules),
            Ok(ExportFlag::Excluded)
        );
        assert_eq!(
            export_decision(&SceneObject::new("Wall_F"), &hierarchy, &reloaded.rules),
            Ok(ExportDecision::ClassRule(ExportFlag::Unset))
        );
    }
}

/// Create the shipped config plus a hierarchy covering every declared class
pub fn create_test_setup() -> (AddonConfig, ClassHierarchy) {
    let config = AddonConfig::builtin();
    let hierarchy = ClassHierarchy::from_links([
        ("All", None),
        ("AllVehicles", Some("All")),
        ("Car_F", Some("AllVehicles")),
        ("Shelter_base_F", Some("AllVehicles")),
        ("CamoNet_BLUFOR_F", Some("Shelter_base_F")),
        ("Wall_F", None),
        ("Land_New_WiredFence_5m_F", Some("Wall_F")),
        ("Land_New_WiredFence_10m_F", Some("Wall_F")),
        ("TargetBootcampHumanSimple_F", None),
        ("TargetBootcampHuman_F", Some("TargetBootcampHumanSimple_F")),
    ]);
    (config, hierarchy)
}
