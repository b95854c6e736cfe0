//! Canned wearable data for the dashboard.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Steady,
}

impl Trend {
    /// Direction of a signed change; anything within 0.05 points is steady.
    pub fn of(percent: f32) -> Self {
        if percent >= 0.05 {
            Trend::Up
        } else if percent <= -0.05 {
            Trend::Down
        } else {
            Trend::Steady
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "↗",
            Trend::Down => "↘",
            Trend::Steady => "→",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthStat {
    pub label: &'static str,
    pub value: &'static str,
    pub unit: &'static str,
    pub trend_percent: f32,
}

impl HealthStat {
    pub fn trend(&self) -> Trend {
        Trend::of(self.trend_percent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub label: &'static str,
    pub value: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Series {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub unit: &'static str,
    pub points: &'static [SeriesPoint],
}

const fn point(label: &'static str, value: f32) -> SeriesPoint {
    SeriesPoint { label, value }
}

pub const HEART_RATE: Series = Series {
    title: "Heart Rate Trend",
    subtitle: "Continuous monitoring data",
    unit: "bpm",
    points: &[
        point("08:00", 70.0),
        point("10:00", 75.0),
        point("12:00", 82.0),
        point("14:00", 78.0),
        point("16:00", 72.0),
        point("18:00", 85.0),
        point("20:00", 71.0),
    ],
};

pub const WEEKLY_STEPS: Series = Series {
    title: "Weekly Activity",
    subtitle: "Step count progress",
    unit: "steps",
    points: &[
        point("Mon", 4200.0),
        point("Tue", 5100.0),
        point("Wed", 6800.0),
        point("Thu", 3500.0),
        point("Fri", 7200.0),
        point("Sat", 9000.0),
        point("Sun", 4500.0),
    ],
};

pub const STATS: [HealthStat; 3] = [
    HealthStat {
        label: "Heart Rate",
        value: "72",
        unit: "bpm",
        trend_percent: 2.4,
    },
    HealthStat {
        label: "SpO2 Level",
        value: "98",
        unit: "%",
        trend_percent: 0.5,
    },
    HealthStat {
        label: "Steps Today",
        value: "4,500",
        unit: "steps",
        trend_percent: 12.3,
    },
];

pub const DEVICE_NAME: &str = "Apple Watch Series 8";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_follows_sign_of_change() {
        assert_eq!(Trend::of(2.4), Trend::Up);
        assert_eq!(Trend::of(-1.5), Trend::Down);
        assert_eq!(Trend::of(0.0), Trend::Steady);
        assert_eq!(Trend::of(-0.01), Trend::Steady);
    }

    #[test]
    fn dashboard_stats_are_all_rising() {
        assert!(STATS.iter().all(|stat| stat.trend() == Trend::Up));
    }
}
