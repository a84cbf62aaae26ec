//! SVG card composition.
//!
//! One parameterized rendering path: [`CardOptions`] decides dimensions and
//! which sections appear, and [`render_card`] lays everything out in a
//! single pass. The fallback [`error_card`] shares the same options so
//! failures keep the card's footprint.

use crate::stats::UserStats;
use crate::streak::StreakResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const FONT_STACK: &str = "system-ui,Segoe UI,Roboto,Arial";

/// Full dash length of the grade ring stroke.
const RING_DASH_TOTAL: f64 = 339.0;

/// Display names longer than this are cut to keep the header on one line.
const NAME_MAX_CHARS: usize = 18;

/// Typed rendering configuration for the card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardOptions {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    /// Follower / following / public repo mini boxes.
    #[serde(default = "default_section")]
    pub show_profile_boxes: bool,

    /// Stars / PRs / issues / merged-PR rows.
    #[serde(default = "default_section")]
    pub show_stats: bool,

    /// Current and longest streak rows.
    #[serde(default = "default_section")]
    pub show_streaks: bool,

    /// Grade ring on the right.
    #[serde(default = "default_section")]
    pub show_grade_ring: bool,

    /// Caption centered at the bottom edge.
    #[serde(default = "default_footer")]
    pub footer: String,
}

fn default_width() -> u32 {
    920
}

fn default_height() -> u32 {
    360
}

fn default_section() -> bool {
    true
}

fn default_footer() -> String {
    "Auto-updated from the GitHub API".to_string()
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            show_profile_boxes: default_section(),
            show_stats: default_section(),
            show_streaks: default_section(),
            show_grade_ring: default_section(),
            footer: default_footer(),
        }
    }
}

/// Escape text for interpolation into SVG markup.
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// "2024-01-05" -> "Jan 05, 2024"; unparseable dates pass through as-is.
fn format_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%b %d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Human streak summary, e.g. "12 days (Jan 05, 2024 - Jan 19, 2024)".
pub fn format_streak(streak: &StreakResult) -> String {
    match (&streak.start, &streak.end) {
        (Some(start), Some(end)) => {
            let unit = if streak.length == 1 { "day" } else { "days" };
            format!(
                "{} {} ({} - {})",
                streak.length,
                unit,
                format_date(start),
                format_date(end)
            )
        }
        _ => "0 days".to_string(),
    }
}

/// Render the stats card as an SVG document.
pub fn render_card(stats: &UserStats, options: &CardOptions) -> String {
    let width = options.width;
    let height = options.height;

    let name: String = stats.name.chars().take(NAME_MAX_CHARS).collect();
    let name = escape_xml(&name);
    let login = escape_xml(&stats.login);

    let mut svg = String::with_capacity(8 * 1024);

    svg.push_str(&format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
  <defs>
    <linearGradient id="bg" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0%" stop-color="#050705"/>
      <stop offset="100%" stop-color="#030503"/>
    </linearGradient>
    <radialGradient id="glow" cx="20%" cy="15%" r="70%">
      <stop offset="0%" stop-color="rgba(0,255,150,0.22)"/>
      <stop offset="100%" stop-color="rgba(0,255,150,0)"/>
    </radialGradient>
    <filter id="shadow" x="-20%" y="-20%" width="140%" height="140%">
      <feDropShadow dx="0" dy="18" stdDeviation="18" flood-color="rgba(0,0,0,0.55)"/>
    </filter>
  </defs>

  <rect width="{w}" height="{h}" rx="26" fill="url(#bg)"/>
  <rect width="{w}" height="{h}" rx="26" fill="url(#glow)"/>

  <rect x="14" y="14" width="{iw}" height="{ih}" rx="22"
        fill="rgba(10,12,10,0.65)"
        stroke="rgba(0,255,150,0.22)"
        stroke-width="2"
        filter="url(#shadow)"/>
"##,
        w = width,
        h = height,
        iw = width.saturating_sub(28),
        ih = height.saturating_sub(28),
    ));

    // Avatar tile; the image is skipped when the fetch failed.
    svg.push_str(
        r#"
  <g transform="translate(42,42)">
    <clipPath id="clip">
      <rect x="0" y="0" width="62" height="62" rx="16"/>
    </clipPath>
    <rect x="-3" y="-3" width="68" height="68" rx="18"
          fill="rgba(0,255,150,0.10)" stroke="rgba(0,255,150,0.22)"/>
"#,
    );
    if let Some(avatar) = &stats.avatar_data_uri {
        svg.push_str(&format!(
            r#"    <image href="{}" x="0" y="0" width="62" height="62" clip-path="url(#clip)"/>
"#,
            avatar
        ));
    }
    svg.push_str("  </g>\n");

    svg.push_str(&format!(
        r##"
  <text x="120" y="66" font-size="22" font-weight="900" fill="#E9FFF3"
        font-family="{font}">{name}</text>
  <text x="120" y="88" font-size="13" font-weight="700" fill="rgba(210,255,232,0.65)"
        font-family="{font}">@{login}</text>
"##,
        font = FONT_STACK,
        name = name,
        login = login,
    ));

    if options.show_profile_boxes {
        // Three fixed-width boxes spread evenly inside the margins.
        let box_width = 256;
        let margin = 42;
        let gap = width.saturating_sub(2 * margin + 3 * box_width) / 2;
        let step = box_width + gap;
        svg.push_str(&mini_box(margin, 118, "Followers", stats.followers));
        svg.push_str(&mini_box(margin + step, 118, "Following", stats.following));
        svg.push_str(&mini_box(
            margin + 2 * step,
            118,
            "Public Repos",
            stats.public_repos,
        ));
    }

    if options.show_stats {
        svg.push_str(&format!(
            r##"
  <text x="60" y="210" font-size="15" font-weight="900" fill="#DFFFEF"
        font-family="{}">GitHub Stats</text>
"##,
            FONT_STACK
        ));
        svg.push_str(&stat_row(60, 236, "Total Stars Earned", &stats.total_stars.to_string()));
        svg.push_str(&stat_row(60, 262, "Total PRs", &stats.total_prs.to_string()));
        svg.push_str(&stat_row(360, 236, "Total Issues", &stats.total_issues.to_string()));
        svg.push_str(&stat_row(360, 262, "Merged PRs", &stats.merged_prs.to_string()));
    }

    if options.show_streaks {
        svg.push_str(&stat_row(
            60,
            296,
            "Current Streak",
            &format_streak(&stats.streaks.current),
        ));
        svg.push_str(&stat_row(
            60,
            322,
            "Longest Streak",
            &format_streak(&stats.streaks.longest),
        ));
    }

    if options.show_grade_ring {
        let dash = (RING_DASH_TOTAL * stats.grade.ring_fraction()).floor();
        svg.push_str(&format!(
            r##"
  <g transform="translate({x},200)">
    <circle cx="80" cy="40" r="54" stroke="rgba(0,255,150,0.14)" stroke-width="12" fill="none"/>
    <circle cx="80" cy="40" r="54" stroke="#00FF96" stroke-width="12" fill="none"
      stroke-linecap="round"
      stroke-dasharray="{dash} 999"
      transform="rotate(-90 80 40)"/>
    <text x="80" y="48" text-anchor="middle" font-size="40" font-weight="1000" fill="#E9FFF3"
          font-family="{font}">{grade}</text>
    <text x="80" y="70" text-anchor="middle" font-size="12" font-weight="900"
          fill="rgba(210,255,232,0.60)" font-family="{font}">Grade</text>
  </g>
"##,
            x = width.saturating_sub(175),
            dash = dash,
            font = FONT_STACK,
            grade = stats.grade.as_str(),
        ));
    }

    if !options.footer.is_empty() {
        svg.push_str(&format!(
            r#"
  <text x="{x}" y="{y}" text-anchor="middle" font-size="12" font-weight="700"
        fill="rgba(210,255,232,0.50)" font-family="{font}">{footer}</text>
"#,
            x = width / 2,
            y = height.saturating_sub(18),
            font = FONT_STACK,
            footer = escape_xml(&options.footer),
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// Fallback card rendered for user-visible failures.
pub fn error_card(message: &str, options: &CardOptions) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}">
  <rect width="100%" height="100%" rx="26" fill="#050705"/>
  <text x="50%" y="50%" text-anchor="middle" fill="#00ff96"
    font-family="{font}" font-weight="900" font-size="20">{msg}</text>
</svg>
"##,
        w = options.width,
        h = options.height,
        font = FONT_STACK,
        msg = escape_xml(message),
    )
}

fn mini_box(x: u32, y: u32, label: &str, value: u64) -> String {
    format!(
        r##"
  <g>
    <rect x="{x}" y="{y}" width="256" height="74" rx="16"
          fill="rgba(0,0,0,0.35)"
          stroke="rgba(255,255,255,0.06)"/>
    <text x="{lx}" y="{ly}" font-size="12" font-weight="800"
          fill="rgba(210,255,232,0.60)" font-family="{font}">{label}</text>
    <text x="{lx}" y="{vy}" font-size="26" font-weight="1000"
          fill="#00FF96" font-family="{font}">{value}</text>
  </g>
"##,
        x = x,
        y = y,
        lx = x + 18,
        ly = y + 28,
        vy = y + 56,
        font = FONT_STACK,
        label = label,
        value = value,
    )
}

fn stat_row(x: u32, y: u32, label: &str, value: &str) -> String {
    format!(
        r##"
  <g>
    <text x="{x}" y="{y}" font-size="13" font-weight="800"
          fill="rgba(210,255,232,0.72)" font-family="{font}">{label}</text>
    <text x="{vx}" y="{y}" font-size="14" font-weight="1000"
          fill="#E9FFF3" font-family="{font}">{value}</text>
  </g>
"##,
        x = x,
        y = y,
        vx = x + 240,
        font = FONT_STACK,
        label = label,
        value = escape_xml(value),
    )
}
