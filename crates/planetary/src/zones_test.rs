use approx::assert_relative_eq;

use crate::zones::{compute_zones, zone_of, Zone, OUTER_LIMIT};

#[test]
fn zones_partition_the_disk() {
    let zones = compute_zones(1.0, 5700.0);

    assert_relative_eq!(zones[0].inner, 0.0);
    assert_relative_eq!(zones[2].outer, OUTER_LIMIT);
    assert_relative_eq!(zones[0].outer, zones[1].inner);
    assert_relative_eq!(zones[1].outer, zones[2].inner);
}

#[test]
fn zones_are_ordered_inside_out() {
    let zones = compute_zones(1.0, 5700.0);
    assert_eq!(zones[0].zone, Zone::Hot);
    assert_eq!(zones[1].zone, Zone::Warm);
    assert_eq!(zones[2].zone, Zone::Cold);
    assert!(zones[1].inner < zones[1].outer);
}

#[test]
fn solar_reference_boundaries() {
    // At exactly the solar reference temperature and unit flux the fits
    // collapse to their leading constants.
    let zones = compute_zones(1.0, 5700.0);
    assert_relative_eq!(zones[1].inner, 0.72);
    assert_relative_eq!(zones[1].outer, 1.77);
}

#[test]
fn warm_band_scales_with_flux() {
    let dim = compute_zones(0.08, 3000.0);
    let bright = compute_zones(25.0, 9000.0);

    assert!(dim.iter().all(|band| band.width() > 0.0));
    assert!(bright[1].inner > dim[1].inner);
    assert!(bright[1].outer > dim[1].outer);
}

#[test]
fn inner_stays_below_outer_over_realistic_inputs() {
    // Single stars and tight binaries across the whole class table; the
    // summed-temperature aggregation must never invert the band.
    let cases = [
        (0.0001, 2400.0),
        (0.08, 3700.0),
        (1.0, 5778.0),
        (5.0, 7500.0),
        (25.0, 10000.0),
        (0.16, 7400.0),     // M+M binary
        (2.1, 11200.0),     // G+F binary, summed
        (60000.0, 80000.0), // O+B binary, summed
    ];

    for (flux, temperature) in cases {
        let zones = compute_zones(flux, temperature);
        assert!(
            zones[1].inner < zones[1].outer,
            "inverted warm band for flux {} teff {}",
            flux,
            temperature
        );
    }
}

#[test]
fn zone_of_picks_first_matching_band() {
    let zones = compute_zones(1.0, 5700.0);

    assert_eq!(zone_of(&zones, 0.0), Zone::Hot);
    assert_eq!(zone_of(&zones, 0.4), Zone::Hot);
    assert_eq!(zone_of(&zones, 1.0), Zone::Warm);
    assert_eq!(zone_of(&zones, 5.2), Zone::Cold);
    assert_eq!(zone_of(&zones, 77.2), Zone::Cold);
    // At or past the rim, membership falls through to Cold.
    assert_eq!(zone_of(&zones, OUTER_LIMIT), Zone::Cold);
}

#[test]
fn boundary_orbit_belongs_to_the_outer_band() {
    let zones = compute_zones(1.0, 5700.0);
    assert_eq!(zone_of(&zones, zones[1].inner), Zone::Warm);
    assert_eq!(zone_of(&zones, zones[2].inner), Zone::Cold);
}
