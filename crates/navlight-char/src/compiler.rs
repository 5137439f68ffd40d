use crate::descriptor::{Descriptor, LightType};
use crate::parser::parse;
use navlight_core::{Color, ColorToken, MorseTable, Segment, Sequence};

/// Cycle length assumed when a code carries no usable period
const FALLBACK_PERIOD: f64 = 10.0;

/// Presentation dwell per color for continuous fixed/directional lights.
/// A cosmetic convention so multi-color fixed lights stay distinguishable,
/// not a physical blink.
const CONTINUOUS_DWELL: f64 = 3.0;

/// Weight units of the flash pattern: flash, intra-group gap, inter-group gap
const FLASH_WEIGHT: f64 = 0.3;
const FLASH_GAP_WEIGHT: f64 = 0.7;
const GROUP_GAP_WEIGHT: f64 = 2.0;

/// Longest on-time of a single flash, in seconds
const MAX_FLASH_ON: f64 = 0.3;

/// Floor under Morse units and alternating-flash on-times
const MIN_SEGMENT: f64 = 0.05;

/// Occulting duty cycle: the lit fraction of one slot
const OCCULTING_ON_FRACTION: f64 = 0.25;

/// Intensity of the fixed background phase of a fixed-and-flashing light
const BACKGROUND_INTENSITY: f64 = 0.4;

/// Compiles descriptors into cyclic segment sequences
///
/// Compilation never fails: every descriptor yields a non-empty sequence of
/// positive-duration segments. The Morse table is injected at construction so
/// the compiler stays testable without ambient globals; [`Default`] wires the
/// built-in A-Z/0-9 table.
#[derive(Debug, Clone, Default)]
pub struct SequenceCompiler {
    morse: MorseTable,
}

impl SequenceCompiler {
    pub fn new(morse: MorseTable) -> Self {
        SequenceCompiler { morse }
    }

    pub fn compile(&self, descriptor: &Descriptor) -> Sequence {
        let segments = match descriptor.kind {
            LightType::Fixed | LightType::Directional | LightType::DirectionalFixed => {
                fixed(descriptor)
            }
            LightType::Flash | LightType::GroupFlash => flash(descriptor),
            LightType::LongFlash => long_flash(descriptor),
            LightType::Quick => quick(descriptor, 1.0),
            LightType::VeryQuick => quick(descriptor, 0.5),
            LightType::UltraQuick => quick(descriptor, 0.25),
            LightType::InterruptedQuick => interrupted_quick(descriptor),
            LightType::Occulting | LightType::GroupOcculting => occulting(descriptor),
            LightType::Isophase => isophase(descriptor),
            LightType::Alternating
            | LightType::AlternatingFlash
            | LightType::AlternatingOcculting
            | LightType::AlternatingIsophase => alternating(descriptor),
            LightType::FixedFlashing | LightType::FlashFixed => fixed_flashing(descriptor),
            LightType::Morse => self.morse_pattern(descriptor),
        };

        // Parser-produced descriptors never synthesize empty; hand-built
        // degenerate ones (e.g. an empty color list) get the steady default.
        if segments.is_empty() {
            Sequence::new(steady(descriptor))
        } else {
            Sequence::new(segments)
        }
    }

    /// Morse character: dot = 1 unit on, dash = 3 units on, 1 unit dark after
    /// every symbol, and 6 extra trailing units to realize the standard
    /// 7-unit letter gap.
    fn morse_pattern(&self, descriptor: &Descriptor) -> Vec<Segment> {
        let key = descriptor.group.as_deref().unwrap_or("A");
        let code = self.morse.code(key);

        let mut units: Vec<(bool, u32)> = Vec::new();
        for symbol in code.chars() {
            match symbol {
                '.' => units.push((true, 1)),
                '-' => units.push((true, 3)),
                _ => {}
            }
            units.push((false, 1));
        }

        let symbol_units: u32 = units.iter().map(|(_, length)| length).sum();
        let total_units = symbol_units + 6;
        let period = safe_period(descriptor);
        let unit = (period / f64::from(total_units)).max(MIN_SEGMENT);

        let color = descriptor.first_color();
        let mut segments: Vec<Segment> = units
            .into_iter()
            .map(|(on, length)| {
                let duration = f64::from(length) * unit;
                if on {
                    Segment::lit(duration, color)
                } else {
                    Segment::dark(duration, color)
                }
            })
            .collect();

        let used = f64::from(symbol_units) * unit;
        if period > used {
            segments.push(Segment::dark(period - used, color));
        }
        segments
    }
}

/// Compile with the default tables
pub fn compile(descriptor: &Descriptor) -> Sequence {
    SequenceCompiler::default().compile(descriptor)
}

/// Parse and compile in one step; `None` when the code is unparseable
pub fn compile_code(code: &str) -> Option<Sequence> {
    parse(code).ok().map(|descriptor| compile(&descriptor))
}

/// Representative color for a code: the first color, a "/"-joined composite
/// when several are listed, or white when the code cannot be parsed.
pub fn extract_color(code: &str) -> ColorToken {
    match parse(code) {
        Ok(descriptor) if !descriptor.colors.is_empty() => {
            ColorToken::from_colors(&descriptor.colors)
        }
        _ => ColorToken::from(Color::White),
    }
}

/// Explicit period usable for timing; a zero period behaves as absent
fn given_period(descriptor: &Descriptor) -> Option<f64> {
    descriptor.period.filter(|period| *period > 0.0)
}

fn safe_period(descriptor: &Descriptor) -> f64 {
    given_period(descriptor).unwrap_or(FALLBACK_PERIOD)
}

/// Continuous presentation applies only to the always-on family with no period
fn is_continuous(descriptor: &Descriptor) -> bool {
    descriptor.kind.is_fixed_family() && given_period(descriptor).is_none()
}

/// Interpret the verbatim group parameter as "+"-separated positive counts
///
/// Entries that fail to parse (or are zero) are dropped; an absent or fully
/// invalid parameter yields a single count of 1.
fn group_counts(group: Option<&str>) -> Vec<u32> {
    let Some(raw) = group else {
        return vec![1];
    };
    let counts: Vec<u32> = raw
        .split('+')
        .filter_map(|part| part.trim().parse().ok())
        .filter(|count| *count > 0)
        .collect();
    if counts.is_empty() {
        vec![1]
    } else {
        counts
    }
}

/// Steady-on default for descriptors no synthesizer can render
fn steady(descriptor: &Descriptor) -> Vec<Segment> {
    vec![Segment::lit(
        safe_period(descriptor),
        descriptor.first_color(),
    )]
}

/// Fixed / directional: dwell on each color in turn
fn fixed(descriptor: &Descriptor) -> Vec<Segment> {
    let dwell = if is_continuous(descriptor) {
        CONTINUOUS_DWELL
    } else {
        given_period(descriptor)
            .map(|period| period / descriptor.colors.len() as f64)
            .unwrap_or(CONTINUOUS_DWELL)
    };
    descriptor
        .colors
        .iter()
        .map(|&color| Segment::lit(dwell, color))
        .collect()
}

/// Flash / group-flash: weighted pattern fit into the period
///
/// Flashes weigh 0.3, intra-group gaps 0.7, inter-group gaps 2.0. One color
/// is consumed per group, cycling when groups outnumber colors. If the
/// pattern outweighs the period every weight is scaled down to fit exactly;
/// otherwise one weight unit runs as one second and a trailing eclipse
/// absorbs the remainder of the period.
fn flash(descriptor: &Descriptor) -> Vec<Segment> {
    let counts = group_counts(descriptor.group.as_deref());
    let total_flashes: u64 = counts.iter().map(|&count| u64::from(count)).sum();

    // a single ungrouped flash listing several colors shows them together
    let composite = descriptor.kind == LightType::Flash
        && total_flashes == 1
        && descriptor.colors.len() > 1;
    let group_color = |index: usize| -> ColorToken {
        if composite {
            ColorToken::from_colors(&descriptor.colors)
        } else {
            ColorToken::from(descriptor.color_at(index))
        }
    };

    struct Step {
        on: bool,
        weight: f64,
        color: Option<ColorToken>,
    }

    let mut pattern: Vec<Step> = Vec::new();
    for (index, &count) in counts.iter().enumerate() {
        let color = group_color(index);
        for flash_index in 0..count {
            pattern.push(Step {
                on: true,
                weight: FLASH_WEIGHT,
                color: Some(color.clone()),
            });
            if flash_index + 1 < count {
                pattern.push(Step {
                    on: false,
                    weight: FLASH_GAP_WEIGHT,
                    color: None,
                });
            }
        }
        if index + 1 < counts.len() {
            pattern.push(Step {
                on: false,
                weight: GROUP_GAP_WEIGHT,
                color: None,
            });
        }
    }

    let total_weight: f64 = pattern.iter().map(|step| step.weight).sum();
    let scale = match given_period(descriptor) {
        Some(period) if total_weight > period => period / total_weight,
        _ => 1.0,
    };

    let first = ColorToken::from(descriptor.first_color());
    let mut segments: Vec<Segment> = pattern
        .into_iter()
        .map(|step| {
            let color = step.color.unwrap_or_else(|| first.clone());
            let duration = step.weight * scale;
            if step.on {
                Segment::lit(duration, color)
            } else {
                Segment::dark(duration, color)
            }
        })
        .collect();

    if let Some(period) = given_period(descriptor) {
        let used = total_weight * scale;
        if period > used {
            segments.push(Segment::dark(period - used, first));
        }
    }
    segments
}

/// Long flash: lit for 80% of the period
fn long_flash(descriptor: &Descriptor) -> Vec<Segment> {
    let period = safe_period(descriptor);
    let on = period * 0.8;
    let color = descriptor.first_color();
    vec![Segment::lit(on, color), Segment::dark(period - on, color)]
}

/// Quick / very-quick / ultra-quick, parameterized by the base cycle length
///
/// On-time is min(0.3s, 60% of the cycle). A group parameter repeats the
/// cycle and appends a trailing eclipse (remaining period, or four cycles
/// when no period is given); without one, a single cycle is emitted and the
/// caller loops it.
fn quick(descriptor: &Descriptor, cycle: f64) -> Vec<Segment> {
    let on = (cycle * 0.6).min(MAX_FLASH_ON);
    let off = cycle - on;
    let color = descriptor.first_color();
    let mut segments = Vec::new();

    if descriptor.group.is_some() {
        let count = group_counts(descriptor.group.as_deref())[0];
        for _ in 0..count {
            segments.push(Segment::lit(on, color));
            segments.push(Segment::dark(off, color));
        }
        let active = f64::from(count) * cycle;
        let eclipse = given_period(descriptor)
            .map(|period| (period - active).max(0.0))
            .unwrap_or(cycle * 4.0);
        if eclipse > 0.0 {
            segments.push(Segment::dark(eclipse, color));
        }
    } else {
        segments.push(Segment::lit(on, color));
        segments.push(Segment::dark(off, color));
    }
    segments
}

/// Interrupted quick: a counted burst of 1s cycles at 60/40, then an eclipse
fn interrupted_quick(descriptor: &Descriptor) -> Vec<Segment> {
    let count = match descriptor.group.as_deref() {
        Some(raw) => group_counts(Some(raw))[0],
        None => 9,
    };
    let cycle = 1.0;
    let on = cycle * 0.6;
    let off = cycle * 0.4;
    let color = descriptor.first_color();

    let mut segments = Vec::new();
    for _ in 0..count {
        segments.push(Segment::lit(on, color));
        segments.push(Segment::dark(off, color));
    }

    let used = f64::from(count) * cycle;
    let eclipse = match given_period(descriptor) {
        Some(period) if period > used => period - used,
        _ => cycle * 4.0,
    };
    segments.push(Segment::dark(eclipse, color));
    segments
}

/// Occulting / group-occulting: 25% on, 75% off per slot
///
/// The period is divided into one slot per flash plus one budgeted gap slot
/// per group; a full-slot gap is emitted between groups, and after a lone
/// group only when it was written with an explicit parameter.
fn occulting(descriptor: &Descriptor) -> Vec<Segment> {
    let counts = group_counts(descriptor.group.as_deref());
    let total: u64 = counts.iter().map(|&count| u64::from(count)).sum();
    let total_slots = (total + counts.len() as u64) as f64;
    let slot = safe_period(descriptor) / total_slots;
    let on = slot * OCCULTING_ON_FRACTION;
    let off = slot - on;
    let color = descriptor.first_color();

    let mut segments = Vec::new();
    for (index, &count) in counts.iter().enumerate() {
        for _ in 0..count {
            segments.push(Segment::lit(on, color));
            segments.push(Segment::dark(off, color));
        }
        if index + 1 < counts.len() || (counts.len() == 1 && descriptor.group.is_some()) {
            segments.push(Segment::dark(slot, color));
        }
    }
    segments
}

/// Isophase: equal halves of light and dark
fn isophase(descriptor: &Descriptor) -> Vec<Segment> {
    let half = safe_period(descriptor) / 2.0;
    let color = descriptor.first_color();
    vec![Segment::lit(half, color), Segment::dark(half, color)]
}

enum SubPattern {
    Flash,
    Occulting,
    Isophase,
}

/// Alternating: equal time slots shown in rotating colors
///
/// One slot per group-count entry when the parameter names several groups,
/// otherwise one slot per color. Each slot repeats its sub-pattern (taken
/// from the token after "Al"; isophase when there is none) `count` times.
fn alternating(descriptor: &Descriptor) -> Vec<Segment> {
    let sub = match descriptor.kind {
        LightType::AlternatingFlash => SubPattern::Flash,
        LightType::AlternatingOcculting => SubPattern::Occulting,
        _ => SubPattern::Isophase,
    };

    let counts = group_counts(descriptor.group.as_deref());
    let slots: Vec<u32> = if counts.len() > 1 {
        counts
    } else {
        vec![1; descriptor.colors.len()]
    };
    if slots.is_empty() {
        return Vec::new();
    }
    let slot_duration = safe_period(descriptor) / slots.len() as f64;

    let mut segments = Vec::new();
    for (index, &count) in slots.iter().enumerate() {
        let color = descriptor.color_at(index);
        let repetitions = f64::from(count);
        match sub {
            SubPattern::Flash => {
                let gap = FLASH_GAP_WEIGHT;
                let on = ((slot_duration / repetitions) * 0.6).clamp(MIN_SEGMENT, MAX_FLASH_ON);
                for flash_index in 0..count {
                    segments.push(Segment::lit(on, color));
                    if flash_index + 1 < count {
                        segments.push(Segment::dark(gap, color));
                    } else {
                        let used = (repetitions - 1.0) * (on + gap) + on;
                        let remaining = slot_duration - used;
                        if remaining > 0.0 {
                            segments.push(Segment::dark(remaining, color));
                        }
                    }
                }
            }
            SubPattern::Occulting => {
                let cycle = slot_duration / repetitions;
                let on = cycle * OCCULTING_ON_FRACTION;
                for _ in 0..count {
                    segments.push(Segment::lit(on, color));
                    segments.push(Segment::dark(cycle - on, color));
                }
            }
            SubPattern::Isophase => {
                let cycle = slot_duration / repetitions;
                let gap = (cycle * 0.1).min(0.2);
                for _ in 0..count {
                    segments.push(Segment::lit(cycle - gap, color));
                    segments.push(Segment::dark(gap, color));
                }
            }
        }
    }
    segments
}

/// Fixed-and-flashing: a 10% bright flash over a dim, never-dark background
fn fixed_flashing(descriptor: &Descriptor) -> Vec<Segment> {
    let period = safe_period(descriptor);
    let flash = period * 0.1;
    let color = descriptor.first_color();
    vec![
        Segment::lit(flash, color),
        Segment::dimmed(period - flash, color, BACKGROUND_INTENSITY),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use navlight_core::LightState;

    fn compiled(code: &str) -> Sequence {
        compile(&parse(code).unwrap())
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_period_sum(code: &str, period: f64) {
        let total = compiled(code).total_duration();
        assert!(
            (total - period).abs() < 1e-6 * period.max(1.0),
            "{code}: total {total}, period {period}"
        );
    }

    #[test]
    fn test_isophase_halves() {
        let sequence = compiled("Iso W 6s");
        assert_eq!(sequence.len(), 2);
        let segments = sequence.segments();
        assert!(segments[0].is_on());
        assert_close(segments[0].duration, 3.0);
        assert!(!segments[1].is_on());
        assert_close(segments[1].duration, 3.0);
    }

    #[test]
    fn test_quick_without_period_is_one_cycle() {
        let sequence = compiled("Q W");
        assert_eq!(sequence.len(), 2);
        assert_close(sequence.segments()[0].duration, 0.3);
        assert_close(sequence.segments()[1].duration, 0.7);
    }

    #[test]
    fn test_quick_family_base_cycles() {
        for (code, cycle) in [("Q W", 1.0), ("VQ W", 0.5), ("UQ W", 0.25)] {
            let sequence = compiled(code);
            assert_eq!(sequence.len(), 2);
            let on = sequence.segments()[0].duration;
            let off = sequence.segments()[1].duration;
            assert!(on <= MAX_FLASH_ON + 1e-12);
            assert_close(on + off, cycle);
        }
    }

    #[test]
    fn test_quick_group_with_period() {
        let sequence = compiled("Q(6) W 15s");
        // six cycles plus the trailing eclipse
        assert_eq!(sequence.len(), 13);
        assert_close(sequence.segments()[12].duration, 9.0);
        assert_period_sum("Q(6) W 15s", 15.0);
    }

    #[test]
    fn test_quick_group_without_period_gets_default_eclipse() {
        let sequence = compiled("VQ(9) W");
        assert_eq!(sequence.len(), 19);
        // four base cycles of eclipse
        assert_close(sequence.segments()[18].duration, 2.0);
    }

    #[test]
    fn test_interrupted_quick_defaults_to_nine() {
        let sequence = compiled("IQ W 15s");
        assert_eq!(sequence.len(), 19);
        assert_close(sequence.segments()[0].duration, 0.6);
        assert_close(sequence.segments()[1].duration, 0.4);
        assert_close(sequence.segments()[18].duration, 6.0);
        assert_period_sum("IQ W 15s", 15.0);
    }

    #[test]
    fn test_interrupted_quick_without_period() {
        let sequence = compiled("IQ(3) R");
        assert_eq!(sequence.len(), 7);
        assert_close(sequence.segments()[6].duration, 4.0);
    }

    #[test]
    fn test_flash_single_trailing_eclipse() {
        let sequence = compiled("Fl W 10s");
        assert_eq!(sequence.len(), 2);
        assert_close(sequence.segments()[0].duration, 0.3);
        assert_close(sequence.segments()[1].duration, 9.7);
        assert_period_sum("Fl W 10s", 10.0);
    }

    #[test]
    fn test_group_flash_two_plus_one() {
        let sequence = compiled("Fl(2+1) W G 10s");
        let segments = sequence.segments();
        assert_eq!(sequence.len(), 6);

        // two white flashes, the long inter-group gap, one green flash
        assert!(segments[0].is_on());
        assert_eq!(segments[0].color.to_string(), "W");
        assert!(segments[2].is_on());
        assert_eq!(segments[2].color.to_string(), "W");
        assert!(!segments[3].is_on());
        assert_close(segments[3].duration, 2.0);
        assert!(segments[4].is_on());
        assert_eq!(segments[4].color.to_string(), "G");
        assert!(!segments[5].is_on());

        assert_period_sum("Fl(2+1) W G 10s", 10.0);
    }

    #[test]
    fn test_flash_colors_cycle_over_groups() {
        let sequence = compiled("Fl(1+1+1) W G 12s");
        let on_colors: Vec<String> = sequence
            .iter()
            .filter(|segment| segment.is_on())
            .map(|segment| segment.color.to_string())
            .collect();
        assert_eq!(on_colors, vec!["W", "G", "W"]);
    }

    #[test]
    fn test_single_flash_composites_colors() {
        let sequence = compiled("Fl W R 5s");
        let segments = sequence.segments();
        assert_eq!(sequence.len(), 2);
        assert!(segments[0].color.is_composite());
        assert_eq!(segments[0].color.to_string(), "W/R");
        // the trailing eclipse keeps the plain first color
        assert_eq!(segments[1].color.to_string(), "W");
    }

    #[test]
    fn test_group_flash_never_composites() {
        let sequence = compiled("Gp Fl(1) W R 5s");
        assert_eq!(sequence.segments()[0].color.to_string(), "W");
    }

    #[test]
    fn test_flash_scales_down_to_fit() {
        let sequence = compiled("Fl(6) W 2s");
        for segment in sequence.iter().filter(|segment| segment.is_on()) {
            assert!(segment.duration <= MAX_FLASH_ON + 1e-12);
        }
        assert_period_sum("Fl(6) W 2s", 2.0);
    }

    #[test]
    fn test_long_flash_eighty_twenty() {
        let sequence = compiled("LFl W 10s");
        assert_eq!(sequence.len(), 2);
        assert_close(sequence.segments()[0].duration, 8.0);
        assert_close(sequence.segments()[1].duration, 2.0);
    }

    #[test]
    fn test_occulting_budgets_a_gap_slot() {
        // one flash plus one budgeted (unemitted) gap slot: two slots of 4s
        let sequence = compiled("Oc W 8s");
        assert_eq!(sequence.len(), 2);
        assert_close(sequence.segments()[0].duration, 1.0);
        assert_close(sequence.segments()[1].duration, 3.0);
    }

    #[test]
    fn test_occulting_with_parameter_emits_trailing_gap() {
        let sequence = compiled("Oc(2) W 8s");
        let segments = sequence.segments();
        assert_eq!(sequence.len(), 5);
        let slot = 8.0 / 3.0;
        assert_close(segments[0].duration, slot * 0.25);
        assert_close(segments[1].duration, slot * 0.75);
        assert_close(segments[4].duration, slot);
        assert_period_sum("Oc(2) W 8s", 8.0);
    }

    #[test]
    fn test_group_occulting_gap_between_groups_only() {
        let sequence = compiled("Gp Oc(2+1) W 12s");
        let segments = sequence.segments();
        assert_eq!(sequence.len(), 7);
        let slot = 12.0 / 5.0;
        // the single inter-group gap is a full slot
        assert_close(segments[4].duration, slot);
        // budgeted-but-unemitted trailing slot: total is one slot short
        assert_close(sequence.total_duration(), 12.0 - slot);
    }

    #[test]
    fn test_fixed_continuous_cycles_colors() {
        let sequence = compiled("F W R G");
        assert_eq!(sequence.len(), 3);
        for segment in &sequence {
            assert!(segment.is_on());
            assert_close(segment.duration, 3.0);
        }
        assert_close(sequence.total_duration(), 3.0 * 3.0);
    }

    #[test]
    fn test_fixed_with_period_divides_evenly() {
        let sequence = compiled("F W R 6s");
        assert_eq!(sequence.len(), 2);
        assert_close(sequence.segments()[0].duration, 3.0);
        assert_period_sum("F W R 6s", 6.0);
    }

    #[test]
    fn test_directional_is_continuous_without_period() {
        let sequence = compiled("Dir W");
        assert_eq!(sequence.len(), 1);
        assert_close(sequence.segments()[0].duration, 3.0);
    }

    #[test]
    fn test_zero_period_behaves_as_absent() {
        // falsy-zero: "F W 0s" is continuous, not a zero-length cycle
        let sequence = compiled("F W 0s");
        assert_eq!(sequence.len(), 1);
        assert_close(sequence.segments()[0].duration, 3.0);
    }

    #[test]
    fn test_fixed_flashing_never_goes_dark() {
        let sequence = compiled("FFl W 10s");
        let segments = sequence.segments();
        assert_eq!(sequence.len(), 2);
        assert_eq!(segments[0].state, LightState::On);
        assert_eq!(segments[1].state, LightState::On);
        assert_close(segments[0].duration, 1.0);
        assert_close(segments[0].intensity, 1.0);
        assert_close(segments[1].duration, 9.0);
        assert_close(segments[1].intensity, BACKGROUND_INTENSITY);
    }

    #[test]
    fn test_fl_f_matches_ffl() {
        assert_eq!(compiled("Fl F W 10s"), compiled("FFl W 10s"));
    }

    #[test]
    fn test_morse_a_unit_arithmetic() {
        // A = ".-": units 1+1+3+1, plus 6 reserved = 12; unit = 0.5s
        let sequence = compiled("Mo(A) W 6s");
        let segments = sequence.segments();
        assert_eq!(sequence.len(), 5);
        assert_close(segments[0].duration, 0.5);
        assert!(segments[0].is_on());
        assert_close(segments[1].duration, 0.5);
        assert_close(segments[2].duration, 1.5);
        assert!(segments[2].is_on());
        assert_close(segments[3].duration, 0.5);
        assert_close(segments[4].duration, 3.0);
        assert!(!segments[4].is_on());
        assert_period_sum("Mo(A) W 6s", 6.0);
    }

    #[test]
    fn test_morse_on_segments_match_symbols() {
        // U = "..-": three symbols, three lit segments
        let sequence = compiled("Mo(U) W 10s");
        let lit = sequence.iter().filter(|segment| segment.is_on()).count();
        assert_eq!(lit, 3);
    }

    #[test]
    fn test_morse_unknown_key_falls_back_to_a() {
        assert_eq!(compiled("Mo(#) W 6s"), compiled("Mo(A) W 6s"));
    }

    #[test]
    fn test_morse_unit_floor() {
        let sequence = compiled("Mo(A) W 0.2s");
        for segment in &sequence {
            assert!(segment.duration >= MIN_SEGMENT - 1e-12);
        }
        // the floored units overrun the period, so no trailing eclipse
        assert_eq!(sequence.len(), 4);
    }

    #[test]
    fn test_morse_custom_table() {
        let mut table = MorseTable::empty();
        table.insert('S', "...");
        let compiler = SequenceCompiler::new(table);
        let sequence = compiler.compile(&parse("Mo(S) W 6s").unwrap());
        let lit = sequence.iter().filter(|segment| segment.is_on()).count();
        assert_eq!(lit, 3);
    }

    #[test]
    fn test_alternating_default_isophase() {
        let sequence = compiled("Al W R 6s");
        let segments = sequence.segments();
        assert_eq!(sequence.len(), 4);
        assert_close(segments[0].duration, 2.8);
        assert_eq!(segments[0].color.to_string(), "W");
        assert_close(segments[1].duration, 0.2);
        assert_close(segments[2].duration, 2.8);
        assert_eq!(segments[2].color.to_string(), "R");
        assert_period_sum("Al W R 6s", 6.0);
    }

    #[test]
    fn test_alternating_flash_clamps_on_time() {
        let sequence = compiled("Al Fl W R 10s");
        let segments = sequence.segments();
        assert_eq!(sequence.len(), 4);
        assert_close(segments[0].duration, 0.3);
        assert_close(segments[1].duration, 4.7);
        assert_eq!(segments[2].color.to_string(), "R");
        assert_period_sum("Al Fl W R 10s", 10.0);
    }

    #[test]
    fn test_alternating_occulting_ratio() {
        let sequence = compiled("Al Oc W R 8s");
        let segments = sequence.segments();
        assert_eq!(sequence.len(), 4);
        assert_close(segments[0].duration, 1.0);
        assert_close(segments[1].duration, 3.0);
        assert_period_sum("Al Oc W R 8s", 8.0);
    }

    #[test]
    fn test_alternating_multi_group_slots() {
        // two slots from the parameter, isophase repeated twice per slot
        let sequence = compiled("Al(2+2) W R 8s");
        let segments = sequence.segments();
        assert_eq!(sequence.len(), 8);
        assert_close(segments[0].duration, 1.8);
        assert_eq!(segments[0].color.to_string(), "W");
        assert_eq!(segments[4].color.to_string(), "R");
        assert_period_sum("Al(2+2) W R 8s", 8.0);
    }

    #[test]
    fn test_extract_color() {
        assert_eq!(extract_color("Fl W 10s").to_string(), "W");
        assert_eq!(extract_color("Al W R 6s").to_string(), "W/R");
        assert_eq!(extract_color("not a light").to_string(), "W");
    }

    #[test]
    fn test_compile_code_rejects_garbage() {
        assert!(compile_code("Xyz W").is_none());
        assert!(compile_code("Iso W 6s").is_some());
    }

    #[test]
    fn test_group_counts_policy() {
        assert_eq!(group_counts(None), vec![1]);
        assert_eq!(group_counts(Some("3")), vec![3]);
        assert_eq!(group_counts(Some("2+1")), vec![2, 1]);
        assert_eq!(group_counts(Some("2 + 1")), vec![2, 1]);
        assert_eq!(group_counts(Some("x")), vec![1]);
        assert_eq!(group_counts(Some("2+x+1")), vec![2, 1]);
        assert_eq!(group_counts(Some("0")), vec![1]);
    }

    #[test]
    fn test_degenerate_descriptor_gets_steady_default() {
        let descriptor = Descriptor {
            kind: LightType::Fixed,
            group: None,
            colors: Vec::new(),
            period: None,
        };
        let sequence = compile(&descriptor);
        assert_eq!(sequence.len(), 1);
        assert!(sequence.segments()[0].is_on());
        assert_close(sequence.segments()[0].duration, FALLBACK_PERIOD);
    }

    #[test]
    fn test_all_durations_positive() {
        let codes = [
            "F W",
            "F W R G",
            "Dir F W 9s",
            "Fl W 10s",
            "Fl(2+1) W G 10s",
            "Gp Fl(3) W 15s",
            "LFl W 8s",
            "Q W",
            "Q(6) W 15s",
            "VQ(3) G",
            "UQ R",
            "IQ W 14s",
            "Oc W 8s",
            "Gp Oc(2+1) W 12s",
            "Iso G 4s",
            "Al W R G 9s",
            "Al Fl W R 10s",
            "Al Oc W R 8s",
            "FFl W 10s",
            "Mo(U) W 15s",
        ];
        for code in codes {
            let sequence = compiled(code);
            assert!(!sequence.is_empty(), "{code}: empty sequence");
            for segment in &sequence {
                assert!(
                    segment.duration > 0.0 && segment.duration.is_finite(),
                    "{code}: bad duration {}",
                    segment.duration
                );
                assert!(segment.intensity > 0.0 && segment.intensity <= 1.0);
            }
        }
    }
}

