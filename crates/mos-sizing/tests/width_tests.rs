use mos_devices::params::{Nmos, Pmos, Transistor};
use mos_devices::types::Mosfet;
use mos_sizing::{solve_for_width, solve_for_width_with_clm, SizingError};

fn base() -> Transistor {
    Transistor {
        current: Some(2e-3),
        length: Some(1e-4),
        overdrive_voltage: Some(0.2),
        early_voltage: Some(20.0),
        ..Transistor::default()
    }
}

#[test]
fn nmos_width_matches_hand_computation() {
    let device = Mosfet::from(Nmos {
        transistor: Transistor {
            current: Some(2e-3),
            length: Some(1e-4),
            overdrive_voltage: Some(0.2),
            ..Transistor::default()
        },
        transconductance_parameter: Some(2e-4),
        ..Nmos::default()
    });

    // 2 * 0.002 * 0.0001 / (0.0002 * 0.04) = 0.05 m
    let w = solve_for_width(&device).unwrap();
    assert!((w - 0.05).abs() < 1e-12);
}

#[test]
fn width_follows_square_law_identity() {
    let cases = [
        (1e-3, 1e-6, 1e-4, 0.3),
        (5e-4, 2e-6, 5e-5, 0.15),
        (2e-2, 1e-5, 3e-4, 1.0),
    ];
    for (current, length, k, vov) in cases {
        let device = Mosfet::from(Nmos {
            transistor: Transistor {
                current: Some(current),
                length: Some(length),
                overdrive_voltage: Some(vov),
                ..Transistor::default()
            },
            transconductance_parameter: Some(k),
            ..Nmos::default()
        });
        let w = solve_for_width(&device).unwrap();
        let expected = 2.0 * current * length / (k * vov * vov);
        assert!((w - expected).abs() <= 1e-12 * expected.abs());
    }
}

#[test]
fn clm_correction_strictly_shrinks_width() {
    let device = Mosfet::from(Nmos {
        transistor: base(),
        voltage_drain_source: Some(2.0),
        transconductance_parameter: Some(2e-4),
        ..Nmos::default()
    });

    let w = solve_for_width(&device).unwrap();
    let w_clm = solve_for_width_with_clm(&device).unwrap();
    // Vds/Va = 0.1 > 0 so the corrected width must come out smaller.
    assert!(w_clm < w);
    assert!((w_clm * 1.1 - w).abs() < 1e-12);
}

#[test]
fn pmos_and_nmos_agree_on_corrected_width() {
    // Structurally identical devices, voltage drop stated per each
    // variant's own convention, must size identically.
    let nmos = Mosfet::from(Nmos {
        transistor: base(),
        voltage_drain_source: Some(2.0),
        transconductance_parameter: Some(2e-4),
        ..Nmos::default()
    });
    let pmos = Mosfet::from(Pmos {
        transistor: base(),
        voltage_source_drain: Some(2.0),
        transconductance_parameter: Some(2e-4),
        ..Pmos::default()
    });

    let w_n = solve_for_width_with_clm(&nmos).unwrap();
    let w_p = solve_for_width_with_clm(&pmos).unwrap();
    assert!((w_n - w_p).abs() < 1e-15);
}

#[test]
fn pmos_ignores_nmos_style_voltage_field() {
    // Only voltage_source_drain feeds the Pmos correction; leaving it unset
    // is an error even with every other field populated.
    let pmos = Mosfet::from(Pmos {
        transistor: base(),
        voltage_drain_gate: Some(1.3),
        transconductance_parameter: Some(2e-4),
        ..Pmos::default()
    });
    assert_eq!(
        solve_for_width_with_clm(&pmos),
        Err(SizingError::MissingParameter("voltage_source_drain"))
    );
}

#[test]
fn zero_denominators_never_return_infinity() {
    let with_k = |k: f64| {
        Mosfet::from(Nmos {
            transistor: base(),
            voltage_drain_source: Some(2.0),
            transconductance_parameter: Some(k),
            ..Nmos::default()
        })
    };

    assert_eq!(
        solve_for_width(&with_k(0.0)),
        Err(SizingError::ZeroDenominator("transconductance_parameter"))
    );

    let mut device = with_k(2e-4);
    device.transistor_mut().overdrive_voltage = Some(0.0);
    assert_eq!(
        solve_for_width(&device),
        Err(SizingError::ZeroDenominator("overdrive_voltage"))
    );

    let mut device = with_k(2e-4);
    device.transistor_mut().early_voltage = Some(0.0);
    assert_eq!(
        solve_for_width_with_clm(&device),
        Err(SizingError::ZeroDenominator("early_voltage"))
    );
}

#[test]
fn unset_fields_are_named_in_the_error() {
    let device = Mosfet::from(Nmos {
        transconductance_parameter: Some(2e-4),
        ..Nmos::default()
    });
    // First unset field reached by the evaluation order.
    assert_eq!(
        solve_for_width(&device),
        Err(SizingError::MissingParameter("current"))
    );

    let device = Mosfet::from(Nmos {
        transistor: base(),
        transconductance_parameter: Some(2e-4),
        ..Nmos::default()
    });
    assert_eq!(
        solve_for_width_with_clm(&device),
        Err(SizingError::MissingParameter("voltage_drain_source"))
    );
}

#[test]
fn errors_render_the_offending_field() {
    let message = SizingError::MissingParameter("early_voltage").to_string();
    assert!(message.contains("early_voltage"));
    let message = SizingError::ZeroDenominator("overdrive_voltage").to_string();
    assert!(message.contains("overdrive_voltage"));
}
