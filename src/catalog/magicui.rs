//! Magic UI component catalog.
//!
//! Source: <https://magicui.design/docs/components>

use super::{entry, Component};

/// All Magic UI components.
pub static MAGICUI_COMPONENTS: &[Component] = &[
    entry("marquee", "components", "Animated marquee component for logos or text"),
    entry("terminal", "components", "Terminal component with command line interface"),
    entry("hero-video-dialog", "components", "Hero section with video dialog"),
    entry("bento-grid", "components", "Bento grid layout component"),
    entry("animated-list", "components", "Animated list component"),
    entry("dock", "components", "Dock navigation component"),
    entry("globe", "components", "3D globe component"),
    entry("tweet-card", "components", "Twitter/X tweet card component"),
    entry("orbiting-circles", "components", "Orbiting circles animation"),
    entry("avatar-circles", "components", "Avatar circles component"),
    entry("icon-cloud", "components", "Icon cloud visualization"),
    entry("lens", "components", "Lens/magnifying glass effect"),
    entry("pointer", "components", "Custom pointer component"),
    entry("smooth-cursor", "components", "Smooth cursor animation"),
    entry("progressive-blur", "components", "Progressive blur effect"),
    entry("dotted-map", "components", "Dotted map visualization"),
    entry("animated-beam", "special-effects", "Animated beam connecting elements"),
    entry("border-beam", "special-effects", "Animated border beam effect"),
    entry("shine-border", "special-effects", "Shine border animation"),
    entry("magic-card", "special-effects", "Magic card with hover effects"),
    entry("meteors", "special-effects", "Meteor shower animation"),
    entry("confetti", "special-effects", "Confetti animation"),
    entry("particles", "special-effects", "Particle effects"),
    entry("animated-theme-toggler", "special-effects", "Animated theme toggle component"),
    entry("blur-fade", "animations", "Blur fade text animation"),
    entry("text-animate", "text-animations", "Text animation component"),
    entry("typing-animation", "text-animations", "Typing animation effect"),
    entry("line-shadow-text", "text-animations", "Line shadow text effect"),
    entry("aurora-text", "text-animations", "Aurora text animation"),
    entry("video-text", "text-animations", "Video text effect"),
    entry("number-ticker", "text-animations", "Number ticker animation"),
    entry("animated-shiny-text", "text-animations", "Animated shiny text"),
    entry("animated-gradient-text", "text-animations", "Animated gradient text"),
    entry("text-reveal", "text-animations", "Text reveal animation"),
    entry("hyper-text", "text-animations", "Hyper text effect"),
    entry("word-rotate", "text-animations", "Word rotation animation"),
    entry("scroll-based-velocity", "text-animations", "Scroll-based velocity text"),
    entry("sparkles-text", "text-animations", "Sparkles text effect"),
    entry("morphing-text", "text-animations", "Morphing text animation"),
    entry("spinning-text", "text-animations", "Spinning text animation"),
    entry("text-highlighter", "text-animations", "Text highlighter effect"),
    entry("safari", "device-mocks", "Safari browser mock"),
    entry("iphone", "device-mocks", "iPhone device mock"),
    entry("android", "device-mocks", "Android device mock"),
    entry("rainbow-button", "buttons", "Rainbow button component"),
    entry("shimmer-button", "buttons", "Shimmer button effect"),
    entry("ripple-button", "buttons", "Ripple button effect"),
    entry("flickering-grid", "backgrounds", "Flickering grid background"),
    entry("animated-grid-pattern", "backgrounds", "Animated grid pattern"),
    entry("retro-grid", "backgrounds", "Retro grid background"),
    entry("ripple", "backgrounds", "Ripple background effect"),
    entry("dot-pattern", "backgrounds", "Dot pattern background"),
    entry("grid-pattern", "backgrounds", "Grid pattern background"),
    entry("striped-pattern", "backgrounds", "Striped pattern background"),
    entry("interactive-grid-pattern", "backgrounds", "Interactive grid pattern"),
    entry("light-rays", "backgrounds", "Light rays background"),
    entry("shiny-button", "community", "Shiny button component"),
    entry("file-tree", "community", "File tree component"),
    entry("code-comparison", "community", "Code comparison component"),
    entry("scroll-progress", "community", "Scroll progress indicator"),
    entry("neon-gradient-card", "community", "Neon gradient card"),
    entry("comic-text", "community", "Comic text effect"),
    entry("cool-mode", "community", "Cool mode effect"),
    entry("pixel-image", "community", "Pixel image effect"),
    entry("pulsating-button", "community", "Pulsating button"),
    entry("warp-background", "community", "Warp background effect"),
    entry("interactive-hover-button", "community", "Interactive hover button"),
    entry("animated-circular-progress-bar", "community", "Animated circular progress bar"),
];
