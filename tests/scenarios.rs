use plates_rs::{
    calculator::Calculator,
    inventory::Inventory,
    load_plan::{LoadPlanRequest, PlateLoad, plan},
    plate::Plate,
    settings::{self, MemoryStore, PersistedSettings, SETTINGS_KEY, SettingsStore},
    unit::Unit,
};

fn pounds_with(counts: &[(f64, u32)]) -> Inventory {
    let mut inventory = Inventory::new(Unit::Pound);
    for (weight, count) in counts {
        inventory.set_count(*weight, *count).unwrap();
    }
    inventory
}

#[test]
fn zero_counts_leave_everything_to_the_remainder() {
    for unit in [Unit::Pound, Unit::Kilogram] {
        let inventory = Plate::generate_inventory(unit);
        for (desired, barbell) in [(135.0, 45.0), (60.0, 20.0), (10.0, 20.0)] {
            let result = plan(&LoadPlanRequest::new(desired, barbell, &inventory));
            assert!(result.entries().is_empty());
            assert_eq!(result.remainder_per_side(), (desired - barbell) / 2.0);
        }
    }
}

#[test]
fn one_pair_of_45s_makes_135() {
    let inventory = pounds_with(&[(45.0, 0), (25.0, 1)]);
    let result = plan(&LoadPlanRequest::new(135.0, 45.0, inventory.plates()));
    // 25s alone cannot reach 45 per side with one pair.
    assert_eq!(result.entries(), &[PlateLoad::new(25.0, 1)]);
    assert_eq!(result.remainder_per_side(), 20.0);

    let inventory = pounds_with(&[(45.0, 1), (25.0, 1)]);
    let result = plan(&LoadPlanRequest::new(135.0, 45.0, inventory.plates()));
    assert_eq!(result.entries(), &[PlateLoad::new(45.0, 1)]);
    assert_eq!(result.remainder_per_side(), 0.0);
}

#[test]
fn shortfall_is_reported_when_plates_run_out() {
    let inventory = pounds_with(&[(45.0, 1)]);
    let result = plan(&LoadPlanRequest::new(225.0, 45.0, inventory.plates()));
    assert_eq!(result.entries(), &[PlateLoad::new(45.0, 1)]);
    assert_eq!(result.remainder_per_side(), 45.0);
    assert!(!result.is_satisfied());
}

#[test]
fn target_below_bar_needs_no_plates() {
    let inventory = pounds_with(&[(45.0, 2), (10.0, 2)]);
    let result = plan(&LoadPlanRequest::new(30.0, 45.0, inventory.plates()));
    assert!(result.entries().is_empty());
    assert!(result.remainder_per_side() < 0.0);
    assert!(result.is_satisfied());
}

#[test]
fn stale_schema_falls_back_to_defaults() {
    let store = MemoryStore::new();
    let mut stale = PersistedSettings::defaults(Unit::Kilogram);
    stale.schema_version = 0;
    store
        .write(SETTINGS_KEY, &serde_json::to_string(&stale).unwrap())
        .unwrap();

    let calculator = Calculator::restore(&store);

    assert_eq!(calculator, Calculator::new(Unit::Pound));
    assert_eq!(store.read(SETTINGS_KEY).unwrap(), None);
}

#[test]
fn unit_switch_round_trip_never_carries_counts() {
    let store = MemoryStore::new();
    let mut calculator = Calculator::new(Unit::Pound);
    calculator.set_count(45.0, 4).unwrap();
    calculator.set_count(2.5, 2).unwrap();
    calculator.persist(&store);

    let mut restored = Calculator::restore(&store);
    restored.toggle_unit();
    restored.toggle_unit();
    restored.persist(&store);

    let reloaded = settings::load(&store).unwrap();
    assert!(reloaded.uses_pound_mode);
    assert!(reloaded.inventory.iter().all(|plate| plate.count() == 0));
    assert_eq!(reloaded.inventory, Plate::generate_inventory(Unit::Pound));
}
