//! Fixed reference data: skill catalog, platform tables, themes, and banner
//! background presets.
//!
//! Nothing here is user-owned. The selection map in a profile only ever
//! points into these tables (or carries user-added custom names that degrade
//! gracefully at render time).

/// One known skill: display name plus its devicon identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSkill {
    pub name: &'static str,
    pub devicon: &'static str,
}

const fn skill(name: &'static str, devicon: &'static str) -> CatalogSkill {
    CatalogSkill { name, devicon }
}

/// Canonical skill catalog, in display order. Categories render in this
/// order regardless of how the selection map is keyed.
pub const TECH_CATALOG: &[(&str, &[CatalogSkill])] = &[
    (
        "Programming Languages",
        &[
            skill("JavaScript", "javascript-plain"),
            skill("TypeScript", "typescript-plain"),
            skill("Python", "python-plain"),
            skill("Java", "java-plain"),
            skill("Go", "go-original-wordmark"),
            skill("Rust", "rust-plain"),
            skill("C++", "cplusplus-plain"),
            skill("C#", "csharp-plain"),
            skill("PHP", "php-plain"),
            skill("Ruby", "ruby-plain"),
            skill("Swift", "swift-plain"),
            skill("Kotlin", "kotlin-plain"),
            skill("Dart", "dart-plain"),
        ],
    ),
    (
        "Frontend Development",
        &[
            skill("React", "react-original"),
            skill("Next.js", "nextjs-original"),
            skill("Vue.js", "vuejs-plain"),
            skill("Angular", "angularjs-plain"),
            skill("Svelte", "svelte-plain"),
            skill("HTML5", "html5-plain"),
            skill("CSS3", "css3-plain"),
            skill("Sass", "sass-original"),
            skill("Tailwind CSS", "tailwindcss-plain"),
            skill("Bootstrap", "bootstrap-plain"),
            skill("Redux", "redux-original"),
        ],
    ),
    (
        "Backend Development",
        &[
            skill("Node.js", "nodejs-plain"),
            skill("Express", "express-original"),
            skill("Django", "django-plain"),
            skill("Flask", "flask-original"),
            skill("Ruby on Rails", "rails-plain"),
            skill("Spring", "spring-plain"),
        ],
    ),
    (
        "Mobile App Development",
        &[
            skill("React Native", "react-original"),
            skill("Flutter", "flutter-plain"),
            skill("Swift", "swift-plain"),
            skill("Kotlin", "kotlin-plain"),
            skill("Android", "android-plain"),
            skill("iOS", "apple-original"),
        ],
    ),
    (
        "AI/ML",
        &[
            skill("TensorFlow", "tensorflow-original"),
            skill("PyTorch", "pytorch-plain"),
            skill("Scikit-learn", "scikitlearn-plain"),
        ],
    ),
    (
        "Database",
        &[
            skill("MongoDB", "mongodb-plain"),
            skill("PostgreSQL", "postgresql-plain"),
            skill("MySQL", "mysql-plain"),
            skill("SQLite", "sqlite-plain"),
            skill("Redis", "redis-plain"),
        ],
    ),
    (
        "Data Visualization",
        &[skill("D3.js", "d3js-plain"), skill("Chart.js", "chartjs-plain")],
    ),
    (
        "DevOps",
        &[
            skill("Docker", "docker-plain"),
            skill("Kubernetes", "kubernetes-plain"),
            skill("AWS", "amazonwebservices-original"),
            skill("Google Cloud", "googlecloud-plain"),
            skill("Azure", "azure-plain"),
            skill("Git", "git-plain"),
            skill("Jenkins", "jenkins-line"),
            skill("Terraform", "terraform-plain"),
        ],
    ),
    (
        "Backend as a Service (BaaS)",
        &[
            skill("Firebase", "firebase-plain"),
            skill("Supabase", "supabase-plain"),
            skill("Heroku", "heroku-plain"),
        ],
    ),
    (
        "Testing",
        &[
            skill("Jest", "jest-plain"),
            skill("Mocha", "mocha-plain"),
            skill("Cypress", "cypressio-plain"),
            skill("Selenium", "selenium-original"),
        ],
    ),
    (
        "Software",
        &[
            skill("Figma", "figma-plain"),
            skill("Postman", "postman-plain"),
            skill("VS Code", "vscode-plain"),
        ],
    ),
    (
        "Static Site Generators",
        &[
            skill("Gatsby", "gatsby-plain"),
            skill("Jekyll", "jekyll-plain"),
            skill("Hugo", "hugo-plain"),
        ],
    ),
    (
        "Game Engines",
        &[
            skill("Unity", "unity-original"),
            skill("Unreal Engine", "unrealengine-original"),
        ],
    ),
    ("Automation", &[skill("GitHub Actions", "githubactions-plain")]),
    (
        "Other",
        &[
            skill("Linux", "linux-plain"),
            skill("Webpack", "webpack-plain"),
            skill("GraphQL", "graphql-plain"),
        ],
    ),
];

/// Skills belonging to a catalog category, if the category is known.
pub fn catalog_skills(category: &str) -> Option<&'static [CatalogSkill]> {
    TECH_CATALOG
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, skills)| *skills)
}

/// Catalog entry for a skill within one category.
pub fn skill_info(category: &str, name: &str) -> Option<&'static CatalogSkill> {
    catalog_skills(category)?.iter().find(|s| s.name == name)
}

/// First category (in catalog order) that carries the named skill. Used when
/// classifying skill names suggested by the AI adapter.
pub fn category_for_skill(name: &str) -> Option<&'static str> {
    TECH_CATALOG
        .iter()
        .find(|(_, skills)| skills.iter().any(|s| s.name == name))
        .map(|(category, _)| *category)
}

/// Every skill name in the catalog, in catalog order. Feeds the "choose only
/// from this list" clauses in AI prompts.
pub fn all_skill_names() -> Vec<&'static str> {
    TECH_CATALOG
        .iter()
        .flat_map(|(_, skills)| skills.iter().map(|s| s.name))
        .collect()
}

/// A social platform the renderer knows how to badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialPlatform {
    pub name: &'static str,
    /// simple-icons slug
    pub icon: &'static str,
    /// brand color, hex without '#'
    pub color: &'static str,
    pub base_url: &'static str,
}

pub const SOCIAL_PLATFORMS: &[SocialPlatform] = &[
    SocialPlatform { name: "GitHub", icon: "github", color: "181717", base_url: "https://github.com/" },
    SocialPlatform { name: "LinkedIn", icon: "linkedin", color: "0A66C2", base_url: "https://linkedin.com/in/" },
    SocialPlatform { name: "Twitter", icon: "x", color: "000000", base_url: "https://twitter.com/" },
    SocialPlatform { name: "Medium", icon: "medium", color: "12100E", base_url: "https://medium.com/@" },
    SocialPlatform { name: "DEV.to", icon: "devdotto", color: "0A0A0A", base_url: "https://dev.to/" },
    SocialPlatform { name: "Stack Overflow", icon: "stackoverflow", color: "F58025", base_url: "https://stackoverflow.com/users/" },
    SocialPlatform { name: "YouTube", icon: "youtube", color: "FF0000", base_url: "https://youtube.com/c/" },
    SocialPlatform { name: "Instagram", icon: "instagram", color: "E4405F", base_url: "https://instagram.com/" },
    SocialPlatform { name: "Facebook", icon: "facebook", color: "1877F2", base_url: "https://www.facebook.com/" },
    SocialPlatform { name: "Dribbble", icon: "dribbble", color: "EA4C89", base_url: "https://dribbble.com/" },
    SocialPlatform { name: "Behance", icon: "behance", color: "1769FF", base_url: "https://www.behance.net/" },
    SocialPlatform { name: "Website", icon: "apollographql", color: "311C87", base_url: "" },
];

/// Platform table lookup by display name.
pub fn social_platform(name: &str) -> Option<&'static SocialPlatform> {
    SOCIAL_PLATFORMS.iter().find(|p| p.name == name)
}

/// A competitive-programming platform with a profile URL prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemPlatform {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

pub const PROBLEM_SOLVING_PLATFORMS: &[ProblemPlatform] = &[
    ProblemPlatform { name: "HackerRank", icon: "hackerrank", url: "https://www.hackerrank.com/" },
    ProblemPlatform { name: "LeetCode", icon: "leetcode", url: "https://leetcode.com/u/" },
    ProblemPlatform { name: "CodeChef", icon: "codechef", url: "https://www.codechef.com/users/" },
    ProblemPlatform { name: "CodeSignal", icon: "codesignal", url: "https://app.codesignal.com/profile/" },
];

pub fn problem_platform(name: &str) -> Option<&'static ProblemPlatform> {
    PROBLEM_SOLVING_PLATFORMS.iter().find(|p| p.name == name)
}

/// Theme names accepted by the external stat-card services.
pub const STATS_THEMES: &[&str] = &[
    "tokyonight",
    "dark",
    "light",
    "highcontrast",
    "dracula",
    "github_dark",
    "radical",
    "merko",
    "gruvbox",
    "onedark",
    "cobalt",
    "synthwave",
    "catppuccin_latte",
    "catppuccin_mocha",
];

/// Theme name if the card services know it, else the first (default) theme.
pub fn stats_theme(name: &str) -> &'static str {
    STATS_THEMES.iter().find(|t| **t == name).copied().unwrap_or(STATS_THEMES[0])
}

/// SVG background preset for the template banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderBackground {
    pub id: &'static str,
    pub name: &'static str,
    pub group: &'static str,
    pub svg_defs: &'static str,
    pub fill: &'static str,
    pub bg_color: &'static str,
}

pub const HEADER_BACKGROUNDS: &[HeaderBackground] = &[
    HeaderBackground {
        id: "gradient-1",
        name: "Purple Reign",
        group: "Gradients",
        svg_defs: r##"<linearGradient id="g" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="#4c1d95" /><stop offset="100%" stop-color="#1e1b4b" /></linearGradient>"##,
        fill: "url(#g)",
        bg_color: "#0d1117",
    },
    HeaderBackground {
        id: "gradient-2",
        name: "Sunset",
        group: "Gradients",
        svg_defs: r##"<linearGradient id="g" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="#be185d" /><stop offset="100%" stop-color="#5b21b6" /></linearGradient>"##,
        fill: "url(#g)",
        bg_color: "#0d1117",
    },
    HeaderBackground {
        id: "gradient-3",
        name: "Ocean",
        group: "Gradients",
        svg_defs: r##"<linearGradient id="g" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="#047857" /><stop offset="100%" stop-color="#1d4ed8" /></linearGradient>"##,
        fill: "url(#g)",
        bg_color: "#0d1117",
    },
    HeaderBackground {
        id: "gradient-4",
        name: "Cosmic Fusion",
        group: "Gradients",
        svg_defs: r##"<radialGradient id="g"><stop offset="0%" stop-color="#3b0764" /><stop offset="100%" stop-color="#0d1117" /></radialGradient>"##,
        fill: "url(#g)",
        bg_color: "#0d1117",
    },
    HeaderBackground {
        id: "gradient-5",
        name: "Aurora Borealis",
        group: "Gradients",
        svg_defs: r##"<linearGradient id="g" x1="0%" y1="0%" x2="100%" y2="0%"><stop stop-color="#0369a1" offset="0%"/><stop stop-color="#10b981" offset="50%"/><stop stop-color="#8b5cf6" offset="100%"/></linearGradient>"##,
        fill: "url(#g)",
        bg_color: "#0d1117",
    },
    HeaderBackground {
        id: "gradient-6",
        name: "Neon Pulse",
        group: "Gradients",
        svg_defs: r##"<linearGradient id="g" gradientTransform="rotate(45)"><stop offset="0%" stop-color="#db2777" /><stop offset="50%" stop-color="#1d4ed8" /><stop offset="100%" stop-color="#db2777" /></linearGradient>"##,
        fill: "url(#g)",
        bg_color: "#0d1117",
    },
    HeaderBackground {
        id: "pattern-1",
        name: "Matrix",
        group: "Patterns",
        svg_defs: r##"<pattern id="p" width="20" height="20" patternUnits="userSpaceOnUse"><path d="M0 0h20v20H0z" fill="none"/><path d="M20 20H0V0h20v20zM18 2H2v16h16V2zM6 6h2v2H6V6zm4 0h2v2h-2V6zm4 0h2v2h-2V6zM6 10h2v2H6v-2zm4 0h2v2h-2v-2zm4 0h2v2h-2v-2zm-8 4h2v2H6v-2zm4 0h2v2h-2v-2z" fill="rgba(168, 85, 247, 0.1)"/></pattern>"##,
        fill: "url(#p)",
        bg_color: "#0d1117",
    },
    HeaderBackground {
        id: "pattern-2",
        name: "Grid",
        group: "Patterns",
        svg_defs: r##"<pattern id="p" width="20" height="20" patternUnits="userSpaceOnUse"><path d="M 0 0 H 10 V 10 H 0 Z" fill="none" stroke="rgba(168, 85, 247, 0.2)" stroke-width="1"/></pattern>"##,
        fill: "url(#p)",
        bg_color: "#0d1117",
    },
    HeaderBackground {
        id: "pattern-3",
        name: "Circuit Board",
        group: "Patterns",
        svg_defs: r##"<pattern id="p" width="100" height="100" patternUnits="userSpaceOnUse"><path d="M0 25h100M25 0v100M0 75h100M75 0v100M25 25h50v50h-50z" fill="none" stroke="rgba(168, 85, 247, 0.1)" stroke-width="2"/></pattern>"##,
        fill: "url(#p)",
        bg_color: "#0d1117",
    },
    HeaderBackground {
        id: "pattern-4",
        name: "Polka Dots",
        group: "Patterns",
        svg_defs: r##"<pattern id="p" width="20" height="20" patternUnits="userSpaceOnUse"><circle cx="10" cy="10" r="2" fill="rgba(168, 85, 247, 0.2)"/></pattern>"##,
        fill: "url(#p)",
        bg_color: "#0d1117",
    },
    HeaderBackground {
        id: "pattern-5",
        name: "Hexagons",
        group: "Patterns",
        svg_defs: r##"<pattern id="p" width="30" height="26" patternUnits="userSpaceOnUse"><path d="M15 0l15 8.66v17.32l-15 8.66-15-8.66v-17.32z" fill="none" stroke="rgba(168, 85, 247, 0.15)" stroke-width="1"/></pattern>"##,
        fill: "url(#p)",
        bg_color: "#0d1117",
    },
    HeaderBackground {
        id: "pattern-6",
        name: "Wavy",
        group: "Animated",
        svg_defs: r##"<filter id="f"><feTurbulence type="fractalNoise" baseFrequency="0.01 0.04" numOctaves="3" seed="2" /></filter><pattern id="p" width="800" height="200" patternUnits="userSpaceOnUse"><rect width="800" height="200" fill="#a855f7" filter="url(#f)" opacity="0.1"/></pattern>"##,
        fill: "url(#p)",
        bg_color: "#0d1117",
    },
    HeaderBackground {
        id: "pattern-7",
        name: "Nebula",
        group: "Animated",
        svg_defs: r##"<filter id="f"><feTurbulence type="fractalNoise" baseFrequency="0.02" numOctaves="5" seed="10" stitchTiles="stitch"/></filter><pattern id="p" width="800" height="200" patternUnits="userSpaceOnUse"><rect width="800" height="200" fill="#5b21b6" filter="url(#f)" opacity="0.2"/></pattern>"##,
        fill: "url(#p)",
        bg_color: "#0d1117",
    },
];

/// Background preset by id, falling back to the first preset for unknown ids.
pub fn header_background(id: &str) -> &'static HeaderBackground {
    HEADER_BACKGROUNDS
        .iter()
        .find(|b| b.id == id)
        .unwrap_or(&HEADER_BACKGROUNDS[0])
}

// Prompt modifier vocabularies for AI banner generation.
pub const AI_HEADER_STYLES: &[&str] = &[
    "Photorealistic", "Digital Art", "Anime", "Cyberpunk", "Minimalist",
    "3D Render", "Retro", "Abstract", "Pixel Art",
];
pub const AI_HEADER_EFFECTS: &[&str] = &[
    "Cinematic", "Dramatic Lighting", "Bokeh", "Vintage Film", "Glow",
    "Glitch", "Long Exposure", "Fisheye Lens",
];
pub const AI_HEADER_COLORS: &[&str] = &[
    "Vibrant", "Monochromatic", "Pastel", "Neon", "Dark & Moody",
    "Earthy Tones", "Black and White", "Sepia",
];
pub const AI_HEADER_MOTIONS: &[&str] = &[
    "Dynamic", "Serene", "Explosive", "Flowing", "Static", "Blurred", "Warp Speed",
];

/// `value` when the vocabulary carries it, else the vocabulary's first entry.
pub fn prompt_modifier<'a>(vocab: &[&'a str], value: &'a str) -> &'a str {
    vocab.iter().find(|v| **v == value).copied().unwrap_or(vocab[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_lookup() {
        let info = skill_info("Programming Languages", "Rust").unwrap();
        assert_eq!(info.devicon, "rust-plain");
        assert!(skill_info("Programming Languages", "COBOL").is_none());
        assert!(skill_info("Nonexistent", "Rust").is_none());
    }

    #[test]
    fn test_category_for_skill_prefers_catalog_order() {
        // Swift appears under both Programming Languages and Mobile
        assert_eq!(category_for_skill("Swift"), Some("Programming Languages"));
        assert_eq!(category_for_skill("Flutter"), Some("Mobile App Development"));
        assert_eq!(category_for_skill("Brainfuck"), None);
    }

    #[test]
    fn test_header_background_fallback() {
        assert_eq!(header_background("gradient-3").name, "Ocean");
        assert_eq!(header_background("no-such-id").id, "gradient-1");
    }

    #[test]
    fn test_social_platform_lookup() {
        assert_eq!(social_platform("GitHub").unwrap().color, "181717");
        assert_eq!(social_platform("LinkedIn").unwrap().base_url, "https://linkedin.com/in/");
        assert!(social_platform("MySpace").is_none());
    }

    #[test]
    fn test_stats_theme_clamps_unknown_names() {
        assert_eq!(stats_theme("dracula"), "dracula");
        assert_eq!(stats_theme("no-such-theme"), "tokyonight");
    }

    #[test]
    fn test_prompt_modifier_clamps_to_vocabulary() {
        assert_eq!(prompt_modifier(AI_HEADER_STYLES, "Anime"), "Anime");
        assert_eq!(prompt_modifier(AI_HEADER_STYLES, "ignore instructions"), "Photorealistic");
        assert_eq!(prompt_modifier(AI_HEADER_MOTIONS, ""), "Dynamic");
    }
}
