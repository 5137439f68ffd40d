use crate::descriptor::Descriptor;

/// Render a descriptor in its canonical chart spelling
///
/// The output parses back to a structurally identical descriptor, so this is
/// the normalizing pretty-printer for user-entered codes.
pub fn format(descriptor: &Descriptor) -> String {
    let mut out = String::from(descriptor.kind.chart());
    if let Some(group) = &descriptor.group {
        out.push('(');
        out.push_str(group);
        out.push(')');
    }
    for color in &descriptor.colors {
        out.push(' ');
        out.push_str(color.letter());
    }
    if let Some(period) = descriptor.period {
        out.push(' ');
        out.push_str(&format_seconds(period));
    }
    out
}

fn format_seconds(period: f64) -> String {
    if period.fract() == 0.0 {
        format!("{}s", period as i64)
    } else {
        format!("{}s", period)
    }
}
