use bolt_configurator::prelude::*;
use bolt_kernel::prelude::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Action {
    SetConvertible(bool),
    Choose { feature: usize, option: usize },
}

fn catalog() -> impl Strategy<Value = Vec<Feature>> {
    let option_names = prop::collection::vec(
        prop_oneof![
            3 => "[A-Za-z ]{1,12}",
            1 => Just("Convertible Soft Top".to_owned()),
            1 => Just("black CONVERTIBLE SOFT TOP".to_owned()),
        ],
        0..4,
    );

    prop::collection::vec(option_names, 1..5).prop_map(|features| {
        let mut next_option = 100;
        features
            .into_iter()
            .enumerate()
            .map(|(i, names)| {
                let feature_id = FeatureId(i as u64 + 1);
                let options = names
                    .into_iter()
                    .map(|name| {
                        next_option += 1;
                        CarOption {
                            id: OptionId(next_option),
                            feature_id,
                            name,
                            image: String::new(),
                            price_in_cents: Cents(next_option * 10),
                        }
                    })
                    .collect();
                Feature { id: feature_id, name: format!("Feature {i}"), options }
            })
            .collect()
    })
}

fn actions() -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(
        prop_oneof![
            any::<bool>().prop_map(Action::SetConvertible),
            (0..5usize, 0..4usize).prop_map(|(feature, option)| Action::Choose { feature, option }),
        ],
        0..24,
    )
}

proptest! {
    #[test]
    fn initialize_selects_first_option_of_non_empty_features(features in catalog()) {
        let state = SelectionState::initialize(&features, None);

        for feature in &features {
            prop_assert_eq!(state.selected(feature.id), feature.first_option().map(|o| o.id));
        }
        prop_assert_eq!(
            state.selections().len(),
            features.iter().filter(|f| !f.options.is_empty()).count()
        );
    }

    #[test]
    fn transitions_keep_selection_invariants(features in catalog(), actions in actions()) {
        let mut state = SelectionState::initialize(&features, None);

        for action in actions {
            match action {
                Action::SetConvertible(flag) => {
                    let before = state.selections().clone();
                    state.set_convertible(flag);
                    prop_assert_eq!(state.selections(), &before);
                    prop_assert_eq!(state.is_convertible(), flag);
                }
                Action::Choose { feature, option } => {
                    let Some(feature) = features.get(feature) else { continue };
                    let Some(option) = feature.options.get(option) else { continue };
                    let before = state.clone();

                    let first = state.choose_option(feature.id, option);
                    if requires_convertible(option) && !before.is_convertible() {
                        prop_assert!(first.is_err());
                        prop_assert_eq!(&state, &before);
                    } else {
                        prop_assert!(first.is_ok());
                        prop_assert!(state.is_selected(feature.id, option.id));

                        let after_first = state.clone();
                        prop_assert!(state.choose_option(feature.id, option).is_ok());
                        prop_assert_eq!(&state, &after_first);
                    }
                }
            }

            // At most one option per feature, always one of that feature's own options.
            for (feature_id, option_id) in state.selections() {
                let feature = features.iter().find(|f| f.id == *feature_id);
                prop_assert!(feature.and_then(|f| f.option(*option_id)).is_some());
            }
        }
    }

    #[test]
    fn drafts_follow_feature_order(features in catalog(), name in "[A-Za-z]{1,10}", pad in " {0,3}") {
        let state = SelectionState::initialize(&features, None);
        let draft = state.to_draft(&format!("{pad}{name}{pad}")).expect("non-blank name");

        prop_assert_eq!(&draft.name, &name);
        let expected: Vec<OptionId> = features.iter().filter_map(|f| f.first_option().map(|o| o.id)).collect();
        prop_assert_eq!(draft.option_ids, expected);
    }

    #[test]
    fn blank_names_never_produce_drafts(features in catalog(), blank in "[ \t]{0,6}") {
        let state = SelectionState::initialize(&features, None);
        let rejected = matches!(state.to_draft(&blank), Err(ValidationError::EmptyName { .. }));
        prop_assert!(rejected);
    }
}
