//! Built-in design tokens used when a configuration leaves a section out.

use indexmap::IndexMap;

use super::{ComponentSpec, FontMetrics, FontSize, ThemeSpec, TokenTable, TokenValue};

fn strings(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn shades(pairs: &[(&str, &str)]) -> TokenValue {
    TokenValue::Group(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), TokenValue::from(*v)))
            .collect(),
    )
}

pub(super) fn breakpoints() -> IndexMap<String, String> {
    strings(&[
        ("xs", "480px"),
        ("sm", "640px"),
        ("md", "768px"),
        ("lg", "1024px"),
        ("xl", "1280px"),
        ("2xl", "1536px"),
        ("3xl", "1920px"),
    ])
}

pub(super) fn containers() -> IndexMap<String, String> {
    strings(&[
        ("xs", "100%"),
        ("sm", "640px"),
        ("md", "768px"),
        ("lg", "1024px"),
        ("xl", "1280px"),
        ("2xl", "1400px"),
        ("3xl", "1600px"),
    ])
}

pub(super) fn gutters() -> IndexMap<String, String> {
    strings(&[
        ("xs", "0.5rem"),
        ("sm", "1rem"),
        ("md", "1.5rem"),
        ("lg", "2rem"),
        ("xl", "3rem"),
    ])
}

pub(super) fn spacing() -> TokenTable {
    let mut table = TokenTable::new();
    table.insert("0".into(), TokenValue::Number(0.0));
    table.insert("px".into(), TokenValue::from("1px"));
    let scale: &[(&str, f64)] = &[
        ("0.5", 0.125),
        ("1", 0.25),
        ("1.5", 0.375),
        ("2", 0.5),
        ("2.5", 0.625),
        ("3", 0.75),
        ("3.5", 0.875),
        ("4", 1.0),
        ("5", 1.25),
        ("6", 1.5),
        ("7", 1.75),
        ("8", 2.0),
        ("9", 2.25),
        ("10", 2.5),
        ("11", 2.75),
        ("12", 3.0),
        ("14", 3.5),
        ("16", 4.0),
        ("20", 5.0),
        ("24", 6.0),
        ("28", 7.0),
        ("32", 8.0),
        ("36", 9.0),
        ("40", 10.0),
        ("44", 11.0),
        ("48", 12.0),
        ("52", 13.0),
        ("56", 14.0),
        ("60", 15.0),
        ("64", 16.0),
        ("72", 18.0),
        ("80", 20.0),
        ("96", 24.0),
        ("128", 32.0),
        ("160", 40.0),
        ("192", 48.0),
        ("224", 56.0),
        ("256", 64.0),
    ];
    for (key, rem) in scale {
        table.insert(key.to_string(), TokenValue::Number(*rem));
    }
    table
}

pub(super) fn font_size() -> IndexMap<String, FontSize> {
    [
        ("xs", "0.75rem", "1rem"),
        ("sm", "0.875rem", "1.25rem"),
        ("base", "1rem", "1.5rem"),
        ("lg", "1.125rem", "1.75rem"),
        ("xl", "1.25rem", "1.75rem"),
        ("2xl", "1.5rem", "2rem"),
        ("3xl", "1.875rem", "2.25rem"),
        ("4xl", "2.25rem", "2.5rem"),
        ("5xl", "3rem", "1"),
        ("6xl", "3.75rem", "1"),
        ("7xl", "4.5rem", "1"),
        ("8xl", "6rem", "1"),
        ("9xl", "8rem", "1"),
    ]
    .into_iter()
    .map(|(name, size, line_height)| {
        (
            name.to_string(),
            FontSize::WithMetrics(
                size.to_string(),
                FontMetrics {
                    line_height: Some(line_height.to_string()),
                },
            ),
        )
    })
    .collect()
}

pub(super) fn colors() -> TokenTable {
    let mut table = TokenTable::new();
    table.insert(
        "primary".into(),
        shades(&[
            ("25", "#f8faff"),
            ("50", "#f0f6ff"),
            ("100", "#e0edff"),
            ("200", "#b8d9ff"),
            ("300", "#85c2ff"),
            ("400", "#52a9ff"),
            ("500", "#2196f3"),
            ("600", "#1976d2"),
            ("700", "#1565c0"),
            ("800", "#0d47a1"),
            ("900", "#0a3e82"),
            ("950", "#0d2847"),
        ]),
    );
    table.insert(
        "secondary".into(),
        shades(&[
            ("25", "#fafafa"),
            ("50", "#f5f5f5"),
            ("100", "#eeeeee"),
            ("200", "#e0e0e0"),
            ("300", "#bdbdbd"),
            ("400", "#9e9e9e"),
            ("500", "#757575"),
            ("600", "#616161"),
            ("700", "#424242"),
            ("800", "#303030"),
            ("900", "#212121"),
            ("950", "#0f0f0f"),
        ]),
    );
    table.insert(
        "success".into(),
        shades(&[
            ("25", "#f6fef9"),
            ("50", "#ecfdf5"),
            ("100", "#d1fae5"),
            ("200", "#a7f3d0"),
            ("300", "#6ee7b7"),
            ("400", "#34d399"),
            ("500", "#10b981"),
            ("600", "#059669"),
            ("700", "#047857"),
            ("800", "#065f46"),
            ("900", "#064e3b"),
            ("950", "#022c22"),
        ]),
    );
    table.insert(
        "warning".into(),
        shades(&[
            ("25", "#fffcf5"),
            ("50", "#fff8e1"),
            ("100", "#ffecb3"),
            ("200", "#ffe082"),
            ("300", "#ffd54f"),
            ("400", "#ffca28"),
            ("500", "#ffc107"),
            ("600", "#ffb300"),
            ("700", "#ffa000"),
            ("800", "#ff8f00"),
            ("900", "#ff6f00"),
            ("950", "#e65100"),
        ]),
    );
    table.insert(
        "danger".into(),
        shades(&[
            ("25", "#fffbfa"),
            ("50", "#fef2f2"),
            ("100", "#fee2e2"),
            ("200", "#fecaca"),
            ("300", "#fca5a5"),
            ("400", "#f87171"),
            ("500", "#ef4444"),
            ("600", "#dc2626"),
            ("700", "#b91c1c"),
            ("800", "#991b1b"),
            ("900", "#7f1d1d"),
            ("950", "#450a0a"),
        ]),
    );
    table.insert(
        "info".into(),
        shades(&[
            ("25", "#f8faff"),
            ("50", "#eff6ff"),
            ("100", "#dbeafe"),
            ("200", "#bfdbfe"),
            ("300", "#93c5fd"),
            ("400", "#60a5fa"),
            ("500", "#3b82f6"),
            ("600", "#2563eb"),
            ("700", "#1d4ed8"),
            ("800", "#1e40af"),
            ("900", "#1e3a8a"),
            ("950", "#172554"),
        ]),
    );
    table
}

pub(super) fn components() -> IndexMap<String, ComponentSpec> {
    let mut components = IndexMap::new();
    components.insert(
        "card".to_string(),
        ComponentSpec {
            base: "rounded-lg border bg-white shadow-sm".into(),
            variants: strings(&[
                ("elevated", "shadow-lg"),
                ("bordered", "border-2"),
                ("flat", "shadow-none"),
            ]),
            sizes: IndexMap::new(),
        },
    );
    components.insert(
        "button".to_string(),
        ComponentSpec {
            base: "inline-flex items-center justify-center rounded-md font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2".into(),
            variants: strings(&[
                ("default", "bg-primary-500 text-white hover:bg-primary-600"),
                ("secondary", "bg-secondary-100 text-secondary-900 hover:bg-secondary-200"),
                ("outline", "border border-primary-500 text-primary-500 hover:bg-primary-50"),
            ]),
            sizes: strings(&[
                ("sm", "h-9 px-3 text-sm"),
                ("md", "h-10 px-4"),
                ("lg", "h-11 px-8"),
                ("xl", "h-12 px-10 text-lg"),
            ]),
        },
    );
    components
}

pub(super) fn themes() -> IndexMap<String, ThemeSpec> {
    let mut light_colors = TokenTable::new();
    light_colors.insert("background".into(), "#ffffff".into());
    light_colors.insert("foreground".into(), "#0a0a0a".into());
    light_colors.insert(
        "surface".into(),
        shades(&[
            ("50", "#f8fafc"),
            ("100", "#f1f5f9"),
            ("200", "#e2e8f0"),
            ("300", "#cbd5e1"),
            ("400", "#94a3b8"),
            ("500", "#64748b"),
            ("600", "#475569"),
            ("700", "#334155"),
            ("800", "#1e293b"),
            ("900", "#0f172a"),
        ]),
    );

    let mut dark_colors = TokenTable::new();
    dark_colors.insert("background".into(), "#0a0a0a".into());
    dark_colors.insert("foreground".into(), "#fafafa".into());
    dark_colors.insert(
        "surface".into(),
        shades(&[
            ("50", "#0f172a"),
            ("100", "#1e293b"),
            ("200", "#334155"),
            ("300", "#475569"),
            ("400", "#64748b"),
            ("500", "#94a3b8"),
            ("600", "#cbd5e1"),
            ("700", "#e2e8f0"),
            ("800", "#f1f5f9"),
            ("900", "#f8fafc"),
        ]),
    );

    let mut themes = IndexMap::new();
    themes.insert(
        "light".to_string(),
        ThemeSpec {
            name: Some("light".into()),
            default: true,
            color_scheme: Some("light".into()),
            colors: light_colors,
            ..ThemeSpec::default()
        },
    );
    themes.insert(
        "dark".to_string(),
        ThemeSpec {
            name: Some("dark".into()),
            color_scheme: Some("dark".into()),
            colors: dark_colors,
            ..ThemeSpec::default()
        },
    );
    themes
}

pub(super) fn durations() -> IndexMap<String, String> {
    strings(&[
        ("75", "75ms"),
        ("100", "100ms"),
        ("150", "150ms"),
        ("200", "200ms"),
        ("300", "300ms"),
        ("500", "500ms"),
        ("700", "700ms"),
        ("1000", "1000ms"),
    ])
}

pub(super) fn easings() -> IndexMap<String, String> {
    strings(&[
        ("linear", "linear"),
        ("in", "cubic-bezier(0.4, 0, 1, 1)"),
        ("out", "cubic-bezier(0, 0, 0.2, 1)"),
        ("in-out", "cubic-bezier(0.4, 0, 0.2, 1)"),
        ("bounce", "cubic-bezier(0.68, -0.55, 0.265, 1.55)"),
        ("elastic", "cubic-bezier(0.175, 0.885, 0.32, 1.275)"),
    ])
}
