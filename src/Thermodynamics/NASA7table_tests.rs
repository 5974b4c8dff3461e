#[cfg(test)]
mod tests {
    use crate::Thermodynamics::NASA7table::{
        Cp, R_UNIV, SpeciesThermo, T_SPLIT, TempRange, ThermoError, ThermoTable, dh,
        in_fit_window,
    };
    use crate::Thermodynamics::species::Species;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_range_selection_at_split() {
        assert_eq!(TempRange::for_temperature(999.999), TempRange::Low);
        assert_eq!(TempRange::for_temperature(T_SPLIT), TempRange::High);
        assert_eq!(TempRange::for_temperature(2500.0), TempRange::High);

        let table = ThermoTable::default();
        let rec = table.record(Species::CO2);
        assert_eq!(table.coeffs(Species::CO2, 1000.0), &rec.high);
        assert_eq!(table.coeffs(Species::CO2, 999.0), &rec.low);
    }

    #[test]
    fn test_enthalpy_continuous_across_split() {
        let table = ThermoTable::default();
        for sp in Species::ALL {
            let rec = table.record(sp);
            let m = rec.molar_mass;
            let h_low = dh(T_SPLIT, &rec.low) / m;
            let h_high = dh(T_SPLIT, &rec.high) / m;
            assert_relative_eq!(h_low, h_high, max_relative = 1e-5);
            // the evaluator itself is continuous when approaching from below
            assert_relative_eq!(
                table.enthalpy(sp, T_SPLIT - 1e-9),
                table.enthalpy(sp, T_SPLIT),
                max_relative = 1e-5
            );
        }
    }

    #[test]
    fn test_atomic_hydrogen_is_linear_in_temperature() {
        let table = ThermoTable::default();
        let rec = table.record(Species::H);
        for t in [300.0, 750.0, 1000.0, 2500.0] {
            let expected = R_UNIV * (t * rec.low[0] + rec.low[5]) / rec.molar_mass;
            assert_relative_eq!(table.enthalpy(Species::H, t), expected, max_relative = 1e-12);
        }
        // slope is exactly R*a1/M
        let slope = (table.enthalpy(Species::H, 1500.0) - table.enthalpy(Species::H, 500.0)) / 1000.0;
        assert_relative_eq!(slope, R_UNIV * 2.5 / rec.molar_mass, max_relative = 1e-9);
    }

    #[test]
    fn test_ethylene_reference_values() {
        let table = ThermoTable::default();
        // J/kg, evaluated from the fit by hand
        assert_relative_eq!(
            table.enthalpy(Species::C2H4, 750.0),
            2.894584050e6,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            table.enthalpy(Species::C2H4, 298.15),
            1.870121005e6,
            max_relative = 1e-8
        );
        // enthalpy rises with temperature since Cp > 0
        assert!(table.enthalpy(Species::C2H4, 1500.0) > table.enthalpy(Species::C2H4, 750.0));
    }

    #[test]
    fn test_builtin_molar_masses_are_physical() {
        let table = ThermoTable::default();
        for sp in Species::ALL {
            assert!(table.molar_mass(sp) > 0.0);
        }
        assert_relative_eq!(
            table.molar_mass(Species::H2),
            2.0 * table.molar_mass(Species::H),
            max_relative = 1e-12
        );
        assert_relative_eq!(table.molar_mass(Species::C2H4), 0.02805418);
        let heaviest = Species::ALL
            .into_iter()
            .max_by(|a, b| table.molar_mass(*a).total_cmp(&table.molar_mass(*b)));
        assert_eq!(heaviest, Some(Species::CO2));
    }

    #[test]
    fn test_loaded_molar_mass_is_the_one_reported() {
        let mut records: Vec<SpeciesThermo> =
            Species::ALL.iter().map(|sp| *ThermoTable::default().record(*sp)).collect();
        records[Species::C2H4.index()].molar_mass = 0.028;
        let table = ThermoTable::from_records(records).unwrap();
        assert_eq!(table.molar_mass(Species::C2H4), 0.028);
        assert_relative_eq!(
            table.enthalpy(Species::C2H4, 750.0) * 0.028,
            table.molar_enthalpy(Species::C2H4, 750.0),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_molar_and_mass_enthalpy_consistent() {
        let table = ThermoTable::default();
        for sp in Species::ALL {
            let t = 1234.5;
            assert_relative_eq!(
                table.enthalpy(sp, t) * table.molar_mass(sp),
                table.molar_enthalpy(sp, t),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_heat_capacity_matches_enthalpy_derivative() {
        let table = ThermoTable::default();
        let step = 1e-2;
        for sp in Species::ALL {
            for t in [400.0, 1800.0] {
                let numeric =
                    (table.enthalpy(sp, t + step) - table.enthalpy(sp, t - step)) / (2.0 * step);
                assert_relative_eq!(table.Cp(sp, t), numeric, max_relative = 1e-6);
            }
        }
        let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_relative_eq!(
            Cp(2.0, &a),
            R_UNIV * (1.0 + 4.0 + 12.0 + 32.0 + 80.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_mixture_enthalpy() {
        let table = ThermoTable::default();
        let t = 1500.0;
        let mix = [(Species::CO2, 0.6), (Species::H2O, 0.4)];
        let expected = 0.6 * table.enthalpy(Species::CO2, t) + 0.4 * table.enthalpy(Species::H2O, t);
        assert_relative_eq!(table.mixture_enthalpy(&mix, t), expected, max_relative = 1e-12);
        assert_eq!(table.mixture_enthalpy(&[], t), 0.0);
        // pure species
        assert_relative_eq!(
            table.mixture_enthalpy(&[(Species::O2, 1.0)], t),
            table.enthalpy(Species::O2, t),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_evaluated_far_outside_fit_window() {
        let table = ThermoTable::default();
        // no bounds enforced: still a number
        assert!(table.enthalpy(Species::CO, 50.0).is_finite());
        assert!(table.enthalpy(Species::CO, 9000.0).is_finite());

        assert!(in_fit_window(200.0));
        assert!(in_fit_window(6000.0));
        assert!(in_fit_window(750.0));
        assert!(!in_fit_window(50.0));
        assert!(!in_fit_window(9000.0));
        assert!(!in_fit_window(f64::NAN));
    }

    #[test]
    fn test_json_roundtrip_through_file() {
        let table = ThermoTable::default();
        let json = table.to_json_string().unwrap();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = ThermoTable::from_json_file(file.path()).unwrap();
        assert_eq!(loaded, table);
    }

    #[test]
    fn test_custom_table_overrides_builtin() {
        let mut records: Vec<SpeciesThermo> = Species::ALL
            .iter()
            .map(|sp| *ThermoTable::default().record(*sp))
            .collect();
        records.reverse();
        records[0].low = [3.5, 0.0, 0.0, 0.0, 0.0, 0.0];
        let changed = records[0].species;
        let table = ThermoTable::from_records(records).unwrap();
        let m = table.molar_mass(changed);
        assert_relative_eq!(
            table.enthalpy(changed, 500.0),
            R_UNIV * 3.5 * 500.0 / m,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_table_validation_errors() {
        let all: Vec<SpeciesThermo> = Species::ALL
            .iter()
            .map(|sp| *ThermoTable::default().record(*sp))
            .collect();

        let missing = all[..all.len() - 1].to_vec();
        assert!(matches!(
            ThermoTable::from_records(missing),
            Err(ThermoError::MissingSpecies(Species::H))
        ));

        let mut duplicated = all.clone();
        duplicated.push(all[1]);
        assert!(matches!(
            ThermoTable::from_records(duplicated),
            Err(ThermoError::DuplicateSpecies(Species::O2))
        ));

        let mut bad_mass = all.clone();
        bad_mass[2].molar_mass = 0.0;
        assert!(matches!(
            ThermoTable::from_records(bad_mass),
            Err(ThermoError::InvalidMolarMass { species: Species::O, .. })
        ));

        assert!(matches!(
            ThermoTable::from_json_str("{\"invalid\": \"data\"}"),
            Err(ThermoError::SerdeError(_))
        ));
    }

    #[test]
    fn test_pretty_table_has_two_rows_per_species() {
        let table = ThermoTable::default().to_table();
        assert_eq!(table.len(), 1 + 2 * Species::ALL.len());
    }
}
