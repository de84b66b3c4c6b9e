// crates/hon-i18n-core/src/sensor.rs
// ============================================================================
// Module: hon-i18n Sensor Phase Tables
// Description: Static numeric-code to catalog-key tables per appliance sensor.
// Purpose: Name the vendor catalog key behind each reported sensor state code.
// Dependencies: Standard library.
// ============================================================================

//! ## Overview
//! Appliances report operating modes and program phases as numeric codes. The
//! tables below map each code to the vendor catalog key whose label describes
//! it, one table per Home Assistant sensor. Several codes intentionally share
//! a key (for example, multiple wash sub-phases all display as "Washing").
//!
//! ## Invariants
//! - Tables are compile-time constants and never externally configurable.
//! - [`SENSOR_TABLES`] ordering is stable; merge output follows it.

// ============================================================================
// SECTION: Phase Tables
// ============================================================================

/// Machine operating mode codes for the `washing_modes` sensor.
pub const MACHINE_MODES: &[(u8, &str)] = &[
    (0, "WASHING_CMD&CTRL.PHASE_READY.TITLE"),
    (1, "WASHING_CMD&CTRL.PHASE_READY.TITLE"),
    (3, "WASHING_CMD&CTRL.PHASE_PAUSE.TITLE"),
    (4, "WASHING_CMD&CTRL.PHASE_SCHEDULED.TITLE"),
    (5, "WASHING_CMD&CTRL.PHASE_SCHEDULED.TITLE"),
    (6, "WASHING_CMD&CTRL.PHASE_ERROR.TITLE"),
    (7, "WASHING_CMD&CTRL.PHASE_READY.TITLE"),
];

/// Program phase codes for the `program_phases_wm` washing machine sensor.
pub const WASHING_MACHINE_PHASES: &[(u8, &str)] = &[
    (0, "WASHING_CMD&CTRL.PHASE_READY.TITLE"),
    (1, "WASHING_CMD&CTRL.PHASE_WASHING.TITLE"),
    (2, "WASHING_CMD&CTRL.PHASE_WASHING.TITLE"),
    (3, "WASHING_CMD&CTRL.PHASE_SPIN.TITLE"),
    (4, "WASHING_CMD&CTRL.PHASE_RINSE.TITLE"),
    (5, "WASHING_CMD&CTRL.PHASE_RINSE.TITLE"),
    (6, "WASHING_CMD&CTRL.PHASE_RINSE.TITLE"),
    (7, "WASHING_CMD&CTRL.PHASE_DRYING.TITLE"),
    (9, "WASHING_CMD&CTRL.PHASE_STEAM.TITLE"),
    (10, "WASHING_CMD&CTRL.PHASE_READY.TITLE"),
    (11, "WASHING_CMD&CTRL.PHASE_SPIN.TITLE"),
    (12, "WASHING_CMD&CTRL.PHASE_WEIGHTING.TITLE"),
    (13, "WASHING_CMD&CTRL.PHASE_WEIGHTING.TITLE"),
    (14, "WASHING_CMD&CTRL.PHASE_WASHING.TITLE"),
    (15, "WASHING_CMD&CTRL.PHASE_WASHING.TITLE"),
    (16, "WASHING_CMD&CTRL.PHASE_WASHING.TITLE"),
    (17, "WASHING_CMD&CTRL.PHASE_RINSE.TITLE"),
    (18, "WASHING_CMD&CTRL.PHASE_RINSE.TITLE"),
    (19, "WASHING_CMD&CTRL.PHASE_SCHEDULED.TITLE"),
    (20, "WASHING_CMD&CTRL.PHASE_TUMBLING.TITLE"),
    (24, "WASHING_CMD&CTRL.PHASE_REFRESH.TITLE"),
    (25, "WASHING_CMD&CTRL.PHASE_WASHING.TITLE"),
    (26, "WASHING_CMD&CTRL.PHASE_HEATING.TITLE"),
    (27, "WASHING_CMD&CTRL.PHASE_WASHING.TITLE"),
];

/// Program phase codes for the `program_phases_td` tumble dryer sensor.
pub const TUMBLE_DRYER_PHASES: &[(u8, &str)] = &[
    (0, "WASHING_CMD&CTRL.PHASE_READY.TITLE"),
    (1, "TD_CMD&CTRL.STATUS_PHASE.PHASE_HEAT_STROKE"),
    (2, "WASHING_CMD&CTRL.PHASE_DRYING.TITLE"),
    (3, "TD_CMD&CTRL.STATUS_PHASE.PHASE_COOLDOWN"),
    (13, "TD_CMD&CTRL.STATUS_PHASE.PHASE_COOLDOWN"),
    (14, "TD_CMD&CTRL.STATUS_PHASE.PHASE_HEAT_STROKE"),
    (15, "TD_CMD&CTRL.STATUS_PHASE.PHASE_HEAT_STROKE"),
    (16, "TD_CMD&CTRL.STATUS_PHASE.PHASE_COOLDOWN"),
    (18, "WASHING_CMD&CTRL.PHASE_TUMBLING.DASHBOARD_TITLE"),
    (19, "WASHING_CMD&CTRL.PHASE_DRYING.TITLE"),
    (20, "WASHING_CMD&CTRL.PHASE_DRYING.TITLE"),
];

/// Program phase codes for the `program_phases_dw` dishwasher sensor.
pub const DISHWASHER_PHASES: &[(u8, &str)] = &[
    (0, "WASHING_CMD&CTRL.PHASE_READY.TITLE"),
    (1, "WASHING_CMD&CTRL.PHASE_PREWASH.TITLE"),
    (2, "WASHING_CMD&CTRL.PHASE_WASHING.TITLE"),
    (3, "WASHING_CMD&CTRL.PHASE_RINSE.TITLE"),
    (4, "WASHING_CMD&CTRL.PHASE_DRYING.TITLE"),
    (5, "WASHING_CMD&CTRL.PHASE_READY.TITLE"),
    (6, "WASHING_CMD&CTRL.PHASE_HOT_RINSE.TITLE"),
];

/// Sensor name to phase table pairs, in merge output order.
pub const SENSOR_TABLES: &[(&str, &[(u8, &str)])] = &[
    ("washing_modes", MACHINE_MODES),
    ("program_phases_wm", WASHING_MACHINE_PHASES),
    ("program_phases_td", TUMBLE_DRYER_PHASES),
    ("program_phases_dw", DISHWASHER_PHASES),
];

// ============================================================================
// SECTION: Tests
// ============================================================================
