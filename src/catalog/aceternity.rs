//! Aceternity UI component catalog, with usage context.
//!
//! Source: <https://ui.aceternity.com/components>

use super::{Component, ComponentContext};

/// All Aceternity UI components.
pub static ACETERNITY_COMPONENTS: &[Component] = &[
    Component {
        name: "dotted-glow-background",
        category: "backgrounds",
        description: "A background effect with opacity animation, glow effect and more",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Background effects", "Decorative backgrounds", "Visual effects"],
            when_to_use: &["Premium backgrounds", "Animated effects", "Decorative elements"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["background-gradient", "glowing-effect"],
        }),
    },
    Component {
        name: "background-ripple-effect",
        category: "backgrounds",
        description: "A grid of cells that ripple when clicked",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Background effects", "Decorative backgrounds", "Interactive backgrounds"],
            when_to_use: &["Premium backgrounds", "Animated effects", "Interactive elements"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["background-gradient", "ripple"],
        }),
    },
    Component {
        name: "sparkles",
        category: "backgrounds",
        description: "A configurable sparkles component that can be used as a background",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Background effects", "Decorative backgrounds", "Visual effects"],
            when_to_use: &["Premium backgrounds", "Animated effects", "Decorative elements"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["background-gradient", "glowing-stars"],
        }),
    },
    Component {
        name: "background-gradient",
        category: "backgrounds",
        description: "An animated gradient that sits at the background",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Background effects", "Decorative backgrounds", "Visual effects"],
            when_to_use: &["Premium backgrounds", "Animated effects", "Decorative elements"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["gradient-animation", "dotted-glow-background"],
        }),
    },
    Component {
        name: "gradient-animation",
        category: "backgrounds",
        description: "A smooth and elegant background gradient animation",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Background effects", "Decorative backgrounds", "Visual effects"],
            when_to_use: &["Premium backgrounds", "Animated effects", "Decorative elements"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["background-gradient", "wavy-background"],
        }),
    },
    Component {
        name: "wavy-background",
        category: "backgrounds",
        description: "A cool background effect with waves that move",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Background effects", "Decorative backgrounds", "Visual effects"],
            when_to_use: &["Premium backgrounds", "Animated effects", "Decorative elements"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["background-lines", "gradient-animation"],
        }),
    },
    Component {
        name: "background-boxes",
        category: "backgrounds",
        description: "A full width background box container that highlights on hover",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Background effects", "Decorative backgrounds", "Interactive backgrounds"],
            when_to_use: &["Premium backgrounds", "Animated effects", "Interactive elements"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["background-gradient", "canvas-reveal-effect"],
        }),
    },
    Component {
        name: "background-beams",
        category: "backgrounds",
        description: "Multiple background beams that follow a path of SVG",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Background effects", "Decorative backgrounds", "Visual effects"],
            when_to_use: &["Premium backgrounds", "Animated effects", "Decorative elements"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["tracing-beam", "background-beams-with-collision"],
        }),
    },
    Component {
        name: "background-beams-with-collision",
        category: "backgrounds",
        description: "Exploding beams in the background",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Background effects", "Decorative backgrounds", "Visual effects"],
            when_to_use: &["Premium backgrounds", "Animated effects", "Decorative elements"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["background-beams", "meteors"],
        }),
    },
    Component {
        name: "background-lines",
        category: "backgrounds",
        description: "A set of svg paths that animate in a wave pattern",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Background effects", "Decorative backgrounds", "Visual effects"],
            when_to_use: &["Premium backgrounds", "Animated effects", "Decorative elements"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["wavy-background", "tracing-beam"],
        }),
    },
    Component {
        name: "aurora-background",
        category: "backgrounds",
        description: "A subtle Aurora or Southern Lights background",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Background effects", "Decorative backgrounds", "Visual effects"],
            when_to_use: &["Premium backgrounds", "Animated effects", "Decorative elements"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["background-gradient", "glowing-stars"],
        }),
    },
    Component {
        name: "meteors",
        category: "backgrounds",
        description: "A group of beams in the background of a container",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Background effects", "Decorative backgrounds", "Visual effects"],
            when_to_use: &["Premium backgrounds", "Animated effects", "Decorative elements"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["shooting-stars", "background-beams-with-collision"],
        }),
    },
    Component {
        name: "glowing-stars",
        category: "backgrounds",
        description: "Card background stars that animate on hover",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Background effects", "Decorative backgrounds", "Card backgrounds"],
            when_to_use: &["Premium backgrounds", "Animated effects", "Card backgrounds"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["shooting-stars", "aurora-background"],
        }),
    },
    Component {
        name: "shooting-stars",
        category: "backgrounds",
        description: "A shooting star animation on top of a starry background",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Background effects", "Decorative backgrounds", "Visual effects"],
            when_to_use: &["Premium backgrounds", "Animated effects", "Decorative elements"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["meteors", "glowing-stars"],
        }),
    },
    Component {
        name: "vortex",
        category: "backgrounds",
        description: "A wavy, swirly, vortex background ideal for CTAs",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Background effects", "CTA backgrounds", "Visual effects"],
            when_to_use: &["Premium backgrounds", "CTA sections", "Animated effects"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["background-gradient", "wavy-background"],
        }),
    },
    Component {
        name: "spotlight",
        category: "backgrounds",
        description: "A spotlight effect with Tailwind CSS",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Background effects", "Decorative backgrounds", "Visual effects"],
            when_to_use: &["Premium backgrounds", "Animated effects", "Decorative elements"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["spotlight-new", "lamp-effect"],
        }),
    },
    Component {
        name: "spotlight-new",
        category: "backgrounds",
        description: "A new spotlight component with left and right spotlight",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Background effects", "Decorative backgrounds", "Visual effects"],
            when_to_use: &["Premium backgrounds", "Animated effects", "Decorative elements"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["spotlight", "lamp-effect"],
        }),
    },
    Component {
        name: "canvas-reveal-effect",
        category: "backgrounds",
        description: "A dot background that expands on hover",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Background effects", "Decorative backgrounds", "Interactive backgrounds"],
            when_to_use: &["Premium backgrounds", "Animated effects", "Interactive elements"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["background-boxes", "svg-mask-effect"],
        }),
    },
    Component {
        name: "svg-mask-effect",
        category: "backgrounds",
        description: "A mask reveal effect, hover the cursor over a container",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Background effects", "Decorative backgrounds", "Interactive backgrounds"],
            when_to_use: &["Premium backgrounds", "Animated effects", "Interactive elements"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["canvas-reveal-effect", "tracing-beam"],
        }),
    },
    Component {
        name: "tracing-beam",
        category: "backgrounds",
        description: "A Beam that follows the path of an SVG as the user scrolls",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Background effects", "Decorative backgrounds", "Scroll effects"],
            when_to_use: &["Premium backgrounds", "Scroll effects", "Animated effects"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["background-beams", "background-lines"],
        }),
    },
    Component {
        name: "lamp-effect",
        category: "backgrounds",
        description: "A lamp effect as seen on linear, great for section headers",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Section headers", "Background effects", "Visual effects"],
            when_to_use: &["Premium backgrounds", "Section headers", "Animated effects"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["spotlight", "glowing-effect"],
        }),
    },
    Component {
        name: "grid-and-dot-backgrounds",
        category: "backgrounds",
        description: "A simple grid and dots background",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Background effects", "Decorative backgrounds", "Visual effects"],
            when_to_use: &["Premium backgrounds", "Animated effects", "Decorative elements"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["canvas-reveal-effect", "background-boxes"],
        }),
    },
    Component {
        name: "glowing-effect",
        category: "backgrounds",
        description: "A border glowing effect that adapts to any container",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Background effects", "Decorative backgrounds", "Border effects"],
            when_to_use: &["Premium backgrounds", "Border effects", "Animated effects"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["dotted-glow-background", "lamp-effect"],
        }),
    },
    Component {
        name: "google-gemini-effect",
        category: "backgrounds",
        description: "An effect of SVGs as seen on the Google Gemini Website",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Background effects", "Decorative backgrounds", "Visual effects"],
            when_to_use: &["Premium backgrounds", "Animated effects", "Decorative elements"],
            when_not_to_use: &["Simple backgrounds", "Static content", "Performance-critical pages"],
            related_components: &["background-beams", "svg-mask-effect"],
        }),
    },
    Component {
        name: "tooltip-card",
        category: "cards",
        description: "A tooltip card container that follows mouse pointer when hovered",
        context: Some(ComponentContext {
            use_cases: &["Interactive cards", "Hover effects", "Card animations", "Tooltip cards"],
            when_to_use: &["Interactive cards", "Hover effects", "Tooltip displays"],
            when_not_to_use: &["Static cards", "Simple displays", "Basic layouts"],
            related_components: &["hover-card", "card-hover-effect"],
        }),
    },
    Component {
        name: "pixelated-canvas",
        category: "cards",
        description: "Convert any image to a pixelated canvas mouse distortion effects",
        context: Some(ComponentContext {
            use_cases: &["Interactive cards", "Image effects", "Card animations", "Distortion effects"],
            when_to_use: &["Interactive cards", "Image effects", "Distortion effects"],
            when_not_to_use: &["Static cards", "Simple displays", "Basic layouts"],
            related_components: &["3d-card-effect", "wobble-card"],
        }),
    },
    Component {
        name: "3d-card-effect",
        category: "cards",
        description: "A card perspective effect, hover over the card to elevate card elements",
        context: Some(ComponentContext {
            use_cases: &["Interactive cards", "Hover effects", "Card animations", "3D cards"],
            when_to_use: &["Interactive cards", "Hover effects", "3D effects"],
            when_not_to_use: &["Static cards", "Simple displays", "Basic layouts"],
            related_components: &["comet-card", "pixelated-canvas"],
        }),
    },
    Component {
        name: "evervault-card",
        category: "cards",
        description: "A cool card with amazing hover effect, reveals encrypted text",
        context: Some(ComponentContext {
            use_cases: &["Interactive cards", "Hover effects", "Card animations", "Premium cards"],
            when_to_use: &["Interactive cards", "Hover effects", "Text reveals"],
            when_not_to_use: &["Static cards", "Simple displays", "Basic layouts"],
            related_components: &["card-hover-effect", "text-reveal-card"],
        }),
    },
    Component {
        name: "card-stack",
        category: "cards",
        description: "Cards stack on top of each other after some interval",
        context: Some(ComponentContext {
            use_cases: &["Interactive cards", "Card animations", "Stacking cards", "Card displays"],
            when_to_use: &["Card stacks", "Animated cards", "Card displays"],
            when_not_to_use: &["Static cards", "Simple displays", "Basic layouts"],
            related_components: &["infinite-moving-cards", "card-hover-effect"],
        }),
    },
    Component {
        name: "card-hover-effect",
        category: "cards",
        description: "Hover over the cards and the effect slides to the currently hovered card",
        context: Some(ComponentContext {
            use_cases: &["Interactive cards", "Hover effects", "Card animations", "Premium cards"],
            when_to_use: &["Interactive cards", "Hover effects", "Card animations"],
            when_not_to_use: &["Static cards", "Simple displays", "Basic layouts"],
            related_components: &["tooltip-card", "focus-cards"],
        }),
    },
    Component {
        name: "wobble-card",
        category: "cards",
        description: "A card effect that translates and scales on mousemove",
        context: Some(ComponentContext {
            use_cases: &["Interactive cards", "Hover effects", "Card animations", "Wobble effects"],
            when_to_use: &["Interactive cards", "Hover effects", "Wobble effects"],
            when_not_to_use: &["Static cards", "Simple displays", "Basic layouts"],
            related_components: &["3d-card-effect", "draggable-card"],
        }),
    },
    Component {
        name: "expandable-card",
        category: "cards",
        description: "Click cards to expand them and show additional information",
        context: Some(ComponentContext {
            use_cases: &["Interactive cards", "Expandable content", "Card animations", "Premium cards"],
            when_to_use: &["Expandable content", "Interactive cards", "Card animations"],
            when_not_to_use: &["Static cards", "Simple displays", "Basic layouts"],
            related_components: &["collapsible", "card-hover-effect"],
        }),
    },
    Component {
        name: "card-spotlight",
        category: "cards",
        description: "A card component with a spotlight effect revealing a radial gradient",
        context: Some(ComponentContext {
            use_cases: &["Interactive cards", "Hover effects", "Card animations", "Spotlight effects"],
            when_to_use: &["Interactive cards", "Hover effects", "Spotlight effects"],
            when_not_to_use: &["Static cards", "Simple displays", "Basic layouts"],
            related_components: &["glare-card", "card-hover-effect"],
        }),
    },
    Component {
        name: "focus-cards",
        category: "cards",
        description: "Hover over the card to focus on it, blurring the rest",
        context: Some(ComponentContext {
            use_cases: &["Interactive cards", "Hover effects", "Card animations", "Focus effects"],
            when_to_use: &["Interactive cards", "Hover effects", "Focus effects"],
            when_not_to_use: &["Static cards", "Simple displays", "Basic layouts"],
            related_components: &["card-hover-effect", "expandable-card"],
        }),
    },
    Component {
        name: "infinite-moving-cards",
        category: "cards",
        description: "A customizable group of cards that move infinitely in a loop",
        context: Some(ComponentContext {
            use_cases: &["Interactive cards", "Card animations", "Moving cards", "Carousel cards"],
            when_to_use: &["Card carousels", "Animated cards", "Moving displays"],
            when_not_to_use: &["Static cards", "Simple displays", "Basic layouts"],
            related_components: &["card-stack", "carousel"],
        }),
    },
    Component {
        name: "draggable-card",
        category: "cards",
        description: "A tiltable, draggable card component that jumps on bounds",
        context: Some(ComponentContext {
            use_cases: &["Interactive cards", "Draggable content", "Card animations", "Premium cards"],
            when_to_use: &["Draggable content", "Interactive cards", "Card animations"],
            when_not_to_use: &["Static cards", "Simple displays", "Basic layouts"],
            related_components: &["wobble-card", "3d-card-effect"],
        }),
    },
    Component {
        name: "comet-card",
        category: "cards",
        description: "A perspective, 3D, Tilt card as seen on Perplexity Comet's website",
        context: Some(ComponentContext {
            use_cases: &["Interactive cards", "Hover effects", "Card animations", "3D cards"],
            when_to_use: &["Interactive cards", "Hover effects", "3D effects"],
            when_not_to_use: &["Static cards", "Simple displays", "Basic layouts"],
            related_components: &["3d-card-effect", "glare-card"],
        }),
    },
    Component {
        name: "glare-card",
        category: "cards",
        description: "A glare effect that happens on hover, as seen on Linear's website",
        context: Some(ComponentContext {
            use_cases: &["Interactive cards", "Hover effects", "Card animations", "Glare effects"],
            when_to_use: &["Interactive cards", "Hover effects", "Glare effects"],
            when_not_to_use: &["Static cards", "Simple displays", "Basic layouts"],
            related_components: &["card-spotlight", "comet-card"],
        }),
    },
    Component {
        name: "direction-aware-hover",
        category: "cards",
        description: "A direction aware hover effect using Framer Motion",
        context: Some(ComponentContext {
            use_cases: &["Interactive cards", "Hover effects", "Card animations", "Direction effects"],
            when_to_use: &["Interactive cards", "Hover effects", "Direction effects"],
            when_not_to_use: &["Static cards", "Simple displays", "Basic layouts"],
            related_components: &["card-hover-effect", "wobble-card"],
        }),
    },
    Component {
        name: "parallax-scroll",
        category: "scroll",
        description: "Parallax scroll effect",
        context: Some(ComponentContext {
            use_cases: &["Scroll animations", "Parallax effects", "Scroll reveals", "Interactive scrolling"],
            when_to_use: &["Scroll animations", "Parallax effects", "Scroll reveals"],
            when_not_to_use: &["Simple scrolling", "Static content", "Basic pages"],
            related_components: &["hero-parallax", "sticky-scroll-reveal"],
        }),
    },
    Component {
        name: "sticky-scroll-reveal",
        category: "scroll",
        description: "A sticky container that sticks while scrolling, text reveals on scroll",
        context: Some(ComponentContext {
            use_cases: &["Scroll animations", "Parallax effects", "Scroll reveals", "Sticky content"],
            when_to_use: &["Scroll animations", "Sticky content", "Scroll reveals"],
            when_not_to_use: &["Simple scrolling", "Static content", "Basic pages"],
            related_components: &["parallax-scroll", "text-reveal-card"],
        }),
    },
    Component {
        name: "macbook-scroll",
        category: "scroll",
        description: "Scroll through the page and see the image come out of the screen",
        context: Some(ComponentContext {
            use_cases: &["Scroll animations", "Parallax effects", "Scroll reveals", "Device showcases"],
            when_to_use: &["Scroll animations", "Device showcases", "Parallax effects"],
            when_not_to_use: &["Simple scrolling", "Static content", "Basic pages"],
            related_components: &["parallax-scroll", "container-scroll-animation"],
        }),
    },
    Component {
        name: "container-scroll-animation",
        category: "scroll",
        description: "A scroll animation that rotates in 3d on scroll",
        context: Some(ComponentContext {
            use_cases: &["Scroll animations", "Parallax effects", "Scroll reveals", "3D scroll"],
            when_to_use: &["Scroll animations", "3D effects", "Parallax effects"],
            when_not_to_use: &["Simple scrolling", "Static content", "Basic pages"],
            related_components: &["hero-parallax", "macbook-scroll"],
        }),
    },
    Component {
        name: "hero-parallax",
        category: "scroll",
        description: "A scroll effect with rotation, translation and opacity animations",
        context: Some(ComponentContext {
            use_cases: &["Scroll animations", "Parallax effects", "Scroll reveals", "Hero sections"],
            when_to_use: &["Scroll animations", "Hero sections", "Parallax effects"],
            when_not_to_use: &["Simple scrolling", "Static content", "Basic pages"],
            related_components: &["parallax-scroll", "container-scroll-animation"],
        }),
    },
    Component {
        name: "parallax-grid-scroll",
        category: "scroll",
        description: "A grid where two columns scroll in opposite directions",
        context: Some(ComponentContext {
            use_cases: &["Scroll animations", "Parallax effects", "Scroll reveals", "Grid scroll"],
            when_to_use: &["Scroll animations", "Grid layouts", "Parallax effects"],
            when_not_to_use: &["Simple scrolling", "Static content", "Basic pages"],
            related_components: &["parallax-scroll", "layout-grid"],
        }),
    },
    Component {
        name: "encrypted-text",
        category: "text",
        description: "A text component that reveals the text gradually, gibberish effect",
        context: Some(ComponentContext {
            use_cases: &["Text animations", "Text effects", "Dynamic text", "Text reveals"],
            when_to_use: &["Text animations", "Text effects", "Text reveals"],
            when_not_to_use: &["Static text", "Simple displays", "Plain text"],
            related_components: &["text-generate-effect", "text-reveal-card"],
        }),
    },
    Component {
        name: "layout-text-flip",
        category: "text",
        description: "A text flip effect that changes the layout of surrounding text",
        context: Some(ComponentContext {
            use_cases: &["Text animations", "Text effects", "Dynamic text", "Text flips"],
            when_to_use: &["Text animations", "Text effects", "Text flips"],
            when_not_to_use: &["Static text", "Simple displays", "Plain text"],
            related_components: &["container-text-flip", "flip-words"],
        }),
    },
    Component {
        name: "colourful-text",
        category: "text",
        description: "A text component with various colours, filter and scale effects",
        context: Some(ComponentContext {
            use_cases: &["Text animations", "Text effects", "Dynamic text", "Colorful text"],
            when_to_use: &["Text animations", "Text effects", "Colorful displays"],
            when_not_to_use: &["Static text", "Simple displays", "Plain text"],
            related_components: &["text-hover-effect", "hero-highlight"],
        }),
    },
    Component {
        name: "text-generate-effect",
        category: "text",
        description: "A cool text effect that fades in text on page load, one by one",
        context: Some(ComponentContext {
            use_cases: &["Text animations", "Text effects", "Dynamic text", "Text reveals"],
            when_to_use: &["Text animations", "Text effects", "Text reveals"],
            when_not_to_use: &["Static text", "Simple displays", "Plain text"],
            related_components: &["typewriter-effect", "encrypted-text"],
        }),
    },
    Component {
        name: "typewriter-effect",
        category: "text",
        description: "Text generates as if it is being typed on the screen",
        context: Some(ComponentContext {
            use_cases: &["Text animations", "Text effects", "Dynamic text", "Typewriter text"],
            when_to_use: &["Text animations", "Text effects", "Typewriter displays"],
            when_not_to_use: &["Static text", "Simple displays", "Plain text"],
            related_components: &["text-generate-effect", "flip-words"],
        }),
    },
    Component {
        name: "flip-words",
        category: "text",
        description: "A component that flips through a list of words",
        context: Some(ComponentContext {
            use_cases: &["Text animations", "Text effects", "Dynamic text", "Word flips"],
            when_to_use: &["Text animations", "Text effects", "Word displays"],
            when_not_to_use: &["Static text", "Simple displays", "Plain text"],
            related_components: &["container-text-flip", "layout-text-flip"],
        }),
    },
    Component {
        name: "text-hover-effect",
        category: "text",
        description: "A text hover effect that animates and outlines gradient on hover",
        context: Some(ComponentContext {
            use_cases: &["Text animations", "Text effects", "Dynamic text", "Hover text"],
            when_to_use: &["Text animations", "Text effects", "Hover effects"],
            when_not_to_use: &["Static text", "Simple displays", "Plain text"],
            related_components: &["colourful-text", "hero-highlight"],
        }),
    },
    Component {
        name: "container-text-flip",
        category: "text",
        description: "A container that flips through words, animating the width",
        context: Some(ComponentContext {
            use_cases: &["Text animations", "Text effects", "Dynamic text", "Text flips"],
            when_to_use: &["Text animations", "Text effects", "Text flips"],
            when_not_to_use: &["Static text", "Simple displays", "Plain text"],
            related_components: &["flip-words", "layout-text-flip"],
        }),
    },
    Component {
        name: "hero-highlight",
        category: "text",
        description: "A background effect with a text highlight component",
        context: Some(ComponentContext {
            use_cases: &["Text animations", "Text effects", "Dynamic text", "Hero text"],
            when_to_use: &["Text animations", "Hero sections", "Text highlights"],
            when_not_to_use: &["Static text", "Simple displays", "Plain text"],
            related_components: &["colourful-text", "text-hover-effect"],
        }),
    },
    Component {
        name: "text-reveal-card",
        category: "text",
        description: "Mousemove effect to reveal text content at the bottom of the card",
        context: Some(ComponentContext {
            use_cases: &["Text animations", "Text effects", "Dynamic text", "Text reveals"],
            when_to_use: &["Text animations", "Text effects", "Text reveals"],
            when_not_to_use: &["Static text", "Simple displays", "Plain text"],
            related_components: &["encrypted-text", "sticky-scroll-reveal"],
        }),
    },
    Component {
        name: "tailwind-css-buttons",
        category: "buttons",
        description: "A curated list of awesome, battle tested Tailwind CSS buttons",
        context: Some(ComponentContext {
            use_cases: &["Premium buttons", "Animated buttons", "Interactive buttons", "Button collections"],
            when_to_use: &["Premium buttons", "Animated buttons", "Button collections"],
            when_not_to_use: &["Simple buttons", "Standard actions", "Basic forms"],
            related_components: &["hover-border-gradient", "moving-border"],
        }),
    },
    Component {
        name: "hover-border-gradient",
        category: "buttons",
        description: "A hover effect that expands to the entire container with a gradient border",
        context: Some(ComponentContext {
            use_cases: &["Premium buttons", "Animated buttons", "Interactive buttons", "Gradient buttons"],
            when_to_use: &["Premium buttons", "Animated buttons", "Gradient effects"],
            when_not_to_use: &["Simple buttons", "Standard actions", "Basic forms"],
            related_components: &["moving-border", "stateful-button"],
        }),
    },
    Component {
        name: "moving-border",
        category: "buttons",
        description: "A border that moves around the container",
        context: Some(ComponentContext {
            use_cases: &["Premium buttons", "Animated buttons", "Interactive buttons", "Border buttons"],
            when_to_use: &["Premium buttons", "Animated buttons", "Border effects"],
            when_not_to_use: &["Simple buttons", "Standard actions", "Basic forms"],
            related_components: &["hover-border-gradient", "stateful-button"],
        }),
    },
    Component {
        name: "stateful-button",
        category: "buttons",
        description: "A button that shows a loading state when clicked",
        context: Some(ComponentContext {
            use_cases: &["Premium buttons", "Animated buttons", "Interactive buttons", "Loading buttons"],
            when_to_use: &["Premium buttons", "Loading states", "Interactive buttons"],
            when_not_to_use: &["Simple buttons", "Standard actions", "Basic forms"],
            related_components: &["multi-step-loader", "loader"],
        }),
    },
    Component {
        name: "multi-step-loader",
        category: "loaders",
        description: "A step loader for screens that take a lot of time to load",
        context: Some(ComponentContext {
            use_cases: &["Loading states", "Progress indicators", "Async operations", "Multi-step loading"],
            when_to_use: &["Loading states", "Multi-step processes", "Progress indicators"],
            when_not_to_use: &["Simple loading", "Static content", "Instant actions"],
            related_components: &["loader", "stateful-button"],
        }),
    },
    Component {
        name: "loader",
        category: "loaders",
        description: "A set of simple and minimal loaders",
        context: Some(ComponentContext {
            use_cases: &["Loading states", "Progress indicators", "Async operations", "Loading animations"],
            when_to_use: &["Loading states", "Progress indicators", "Async operations"],
            when_not_to_use: &["Simple loading", "Static content", "Instant actions"],
            related_components: &["multi-step-loader", "spinner"],
        }),
    },
    Component {
        name: "floating-navbar",
        category: "navigation",
        description: "A sticky Navbar that hides on scroll, reveals when scrolled up",
        context: Some(ComponentContext {
            use_cases: &["Navigation bars", "Menus", "Sidebars", "Sticky navigation"],
            when_to_use: &["Navigation bars", "Sticky navigation", "Menus"],
            when_not_to_use: &["Simple links", "Static navigation", "Basic menus"],
            related_components: &["navbar-menu", "resizable-navbar"],
        }),
    },
    Component {
        name: "navbar-menu",
        category: "navigation",
        description: "A navbar menu that animates its children on hover",
        context: Some(ComponentContext {
            use_cases: &["Navigation bars", "Menus", "Sidebars", "Animated menus"],
            when_to_use: &["Navigation bars", "Animated menus", "Menus"],
            when_not_to_use: &["Simple links", "Static navigation", "Basic menus"],
            related_components: &["floating-navbar", "sidebar"],
        }),
    },
    Component {
        name: "sidebar",
        category: "navigation",
        description: "Expandable sidebar that expands on hover",
        context: Some(ComponentContext {
            use_cases: &["Navigation bars", "Menus", "Sidebars", "Expandable navigation"],
            when_to_use: &["Navigation bars", "Sidebars", "Expandable menus"],
            when_not_to_use: &["Simple links", "Static navigation", "Basic menus"],
            related_components: &["navbar-menu", "floating-dock"],
        }),
    },
    Component {
        name: "floating-dock",
        category: "navigation",
        description: "A floating dock mac os style component",
        context: Some(ComponentContext {
            use_cases: &["Navigation bars", "Menus", "Sidebars", "Dock navigation"],
            when_to_use: &["Navigation bars", "Dock navigation", "Menus"],
            when_not_to_use: &["Simple links", "Static navigation", "Basic menus"],
            related_components: &["sidebar", "tabs"],
        }),
    },
    Component {
        name: "tabs",
        category: "navigation",
        description: "Tabs to switch content, click on a tab to check background animation",
        context: Some(ComponentContext {
            use_cases: &["Navigation bars", "Menus", "Sidebars", "Tab navigation"],
            when_to_use: &["Navigation bars", "Tab navigation", "Menus"],
            when_not_to_use: &["Simple links", "Static navigation", "Basic menus"],
            related_components: &["floating-dock", "navbar-menu"],
        }),
    },
    Component {
        name: "resizable-navbar",
        category: "navigation",
        description: "A navbar that changes width on scroll",
        context: Some(ComponentContext {
            use_cases: &["Navigation bars", "Menus", "Sidebars", "Resizable navigation"],
            when_to_use: &["Navigation bars", "Resizable navigation", "Menus"],
            when_not_to_use: &["Simple links", "Static navigation", "Basic menus"],
            related_components: &["floating-navbar", "sticky-banner"],
        }),
    },
    Component {
        name: "sticky-banner",
        category: "navigation",
        description: "A banner component that sticks to top, hides when user scrolls down",
        context: Some(ComponentContext {
            use_cases: &["Navigation bars", "Menus", "Sidebars", "Sticky banners"],
            when_to_use: &["Navigation bars", "Sticky banners", "Menus"],
            when_not_to_use: &["Simple links", "Static navigation", "Basic menus"],
            related_components: &["floating-navbar", "resizable-navbar"],
        }),
    },
    Component {
        name: "signup-form",
        category: "forms",
        description: "A customizable form built on top of shadcn's input and label",
        context: Some(ComponentContext {
            use_cases: &["Form inputs", "Form animations", "Interactive forms", "Signup forms"],
            when_to_use: &["Form inputs", "Signup forms", "Interactive forms"],
            when_not_to_use: &["Simple inputs", "Basic forms", "Static forms"],
            related_components: &["placeholders-and-vanish-input", "file-upload"],
        }),
    },
    Component {
        name: "placeholders-and-vanish-input",
        category: "forms",
        description: "Sliding in placeholders and vanish effect of input on submit",
        context: Some(ComponentContext {
            use_cases: &["Form inputs", "Form animations", "Interactive forms", "Input effects"],
            when_to_use: &["Form inputs", "Input animations", "Interactive forms"],
            when_not_to_use: &["Simple inputs", "Basic forms", "Static forms"],
            related_components: &["signup-form", "file-upload"],
        }),
    },
    Component {
        name: "file-upload",
        category: "forms",
        description: "A minimal file upload form with background grid",
        context: Some(ComponentContext {
            use_cases: &["Form inputs", "Form animations", "Interactive forms", "File uploads"],
            when_to_use: &["Form inputs", "File uploads", "Interactive forms"],
            when_not_to_use: &["Simple inputs", "Basic forms", "Static forms"],
            related_components: &["signup-form", "placeholders-and-vanish-input"],
        }),
    },
    Component {
        name: "animated-modal",
        category: "overlays",
        description: "A customizable, compound modal component with animated transitions",
        context: Some(ComponentContext {
            use_cases: &["Modals", "Tooltips", "Popovers", "Animated modals"],
            when_to_use: &["Modals", "Animated overlays", "Popovers"],
            when_not_to_use: &["Simple dialogs", "Basic tooltips", "Static overlays"],
            related_components: &["animated-tooltip", "link-preview"],
        }),
    },
    Component {
        name: "animated-tooltip",
        category: "overlays",
        description: "A cool tooltip that reveals on hover, follows mouse pointer",
        context: Some(ComponentContext {
            use_cases: &["Modals", "Tooltips", "Popovers", "Animated tooltips"],
            when_to_use: &["Tooltips", "Animated overlays", "Popovers"],
            when_not_to_use: &["Simple dialogs", "Basic tooltips", "Static overlays"],
            related_components: &["animated-modal", "link-preview"],
        }),
    },
    Component {
        name: "link-preview",
        category: "overlays",
        description: "Dynamic link previews for your anchor tags",
        context: Some(ComponentContext {
            use_cases: &["Modals", "Tooltips", "Popovers", "Link previews"],
            when_to_use: &["Link previews", "Animated overlays", "Popovers"],
            when_not_to_use: &["Simple dialogs", "Basic tooltips", "Static overlays"],
            related_components: &["animated-modal", "animated-tooltip"],
        }),
    },
    Component {
        name: "images-slider",
        category: "carousels",
        description: "A full page slider with images that can be navigated with the keyboard",
        context: Some(ComponentContext {
            use_cases: &["Image sliders", "Content carousels", "Testimonials", "Image displays"],
            when_to_use: &["Image sliders", "Content carousels", "Image displays"],
            when_not_to_use: &["Simple lists", "Static content", "Basic displays"],
            related_components: &["carousel", "apple-cards-carousel"],
        }),
    },
    Component {
        name: "carousel",
        category: "carousels",
        description: "A customizable carousel with microinteractions and slider",
        context: Some(ComponentContext {
            use_cases: &["Image sliders", "Content carousels", "Testimonials", "Carousel displays"],
            when_to_use: &["Image sliders", "Content carousels", "Testimonials"],
            when_not_to_use: &["Simple lists", "Static content", "Basic displays"],
            related_components: &["images-slider", "testimonials"],
        }),
    },
    Component {
        name: "apple-cards-carousel",
        category: "carousels",
        description: "A sleek and minimal carousel implementation",
        context: Some(ComponentContext {
            use_cases: &["Image sliders", "Content carousels", "Testimonials", "Card carousels"],
            when_to_use: &["Image sliders", "Card carousels", "Testimonials"],
            when_not_to_use: &["Simple lists", "Static content", "Basic displays"],
            related_components: &["images-slider", "carousel"],
        }),
    },
    Component {
        name: "testimonials",
        category: "carousels",
        description: "Minimal testimonials sections with image and quote",
        context: Some(ComponentContext {
            use_cases: &["Image sliders", "Content carousels", "Testimonials", "Testimonial displays"],
            when_to_use: &["Testimonials", "Content carousels", "Testimonial displays"],
            when_not_to_use: &["Simple lists", "Static content", "Basic displays"],
            related_components: &["carousel", "animated-testimonials"],
        }),
    },
    Component {
        name: "animated-testimonials",
        category: "carousels",
        description: "Minimal testimonials sections with image and quote",
        context: Some(ComponentContext {
            use_cases: &["Image sliders", "Content carousels", "Testimonials", "Animated testimonials"],
            when_to_use: &["Testimonials", "Animated carousels", "Testimonial displays"],
            when_not_to_use: &["Simple lists", "Static content", "Basic displays"],
            related_components: &["testimonials", "carousel"],
        }),
    },
    Component {
        name: "layout-grid",
        category: "layout",
        description: "A layout effect that animates the grid item on click",
        context: Some(ComponentContext {
            use_cases: &["Layout grids", "Grid animations", "Layout effects", "Grid displays"],
            when_to_use: &["Layout grids", "Grid animations", "Layout effects"],
            when_not_to_use: &["Simple grids", "Static layouts", "Basic containers"],
            related_components: &["bento-grid", "container-cover"],
        }),
    },
    Component {
        name: "bento-grid",
        category: "layout",
        description: "A skewed grid layout with Title, description and a header component",
        context: Some(ComponentContext {
            use_cases: &["Layout grids", "Grid animations", "Layout effects", "Bento grids"],
            when_to_use: &["Layout grids", "Bento layouts", "Layout effects"],
            when_not_to_use: &["Simple grids", "Static layouts", "Basic containers"],
            related_components: &["layout-grid", "container-cover"],
        }),
    },
    Component {
        name: "container-cover",
        category: "layout",
        description: "A Cover component that wraps any children, providing beams and space effect",
        context: Some(ComponentContext {
            use_cases: &["Layout grids", "Grid animations", "Layout effects", "Container layouts"],
            when_to_use: &["Layout grids", "Container layouts", "Layout effects"],
            when_not_to_use: &["Simple grids", "Static layouts", "Basic containers"],
            related_components: &["layout-grid", "bento-grid"],
        }),
    },
    Component {
        name: "github-globe",
        category: "data",
        description: "A globe animation as seen on GitHub's homepage",
        context: Some(ComponentContext {
            use_cases: &["Data visualization", "Charts", "Timelines", "Globe displays"],
            when_to_use: &["Data visualization", "Globe displays", "Charts"],
            when_not_to_use: &["Simple data", "Static displays", "Basic tables"],
            related_components: &["world-map", "timeline"],
        }),
    },
    Component {
        name: "world-map",
        category: "data",
        description: "A world map with animated lines and dots",
        context: Some(ComponentContext {
            use_cases: &["Data visualization", "Charts", "Timelines", "Map displays"],
            when_to_use: &["Data visualization", "Map displays", "Charts"],
            when_not_to_use: &["Simple data", "Static displays", "Basic tables"],
            related_components: &["github-globe", "timeline"],
        }),
    },
    Component {
        name: "timeline",
        category: "data",
        description: "A timeline component with sticky header and scroll beam follow",
        context: Some(ComponentContext {
            use_cases: &["Data visualization", "Charts", "Timelines", "Timeline displays"],
            when_to_use: &["Data visualization", "Timelines", "Charts"],
            when_not_to_use: &["Simple data", "Static displays", "Basic tables"],
            related_components: &["github-globe", "world-map"],
        }),
    },
    Component {
        name: "compare",
        category: "data",
        description: "A comparison component between two images",
        context: Some(ComponentContext {
            use_cases: &["Data visualization", "Charts", "Timelines", "Comparison displays"],
            when_to_use: &["Data visualization", "Comparisons", "Charts"],
            when_not_to_use: &["Simple data", "Static displays", "Basic tables"],
            related_components: &["codeblock", "timeline"],
        }),
    },
    Component {
        name: "codeblock",
        category: "data",
        description: "A configurable code block component",
        context: Some(ComponentContext {
            use_cases: &["Data visualization", "Charts", "Timelines", "Code displays"],
            when_to_use: &["Data visualization", "Code displays", "Charts"],
            when_not_to_use: &["Simple data", "Static displays", "Basic tables"],
            related_components: &["compare", "timeline"],
        }),
    },
    Component {
        name: "following-pointer",
        category: "cursor",
        description: "A custom pointer that follows mouse arrow and animates",
        context: Some(ComponentContext {
            use_cases: &["Custom cursors", "Cursor effects", "Interactive cursors", "Pointer animations"],
            when_to_use: &["Custom cursors", "Cursor effects", "Pointer animations"],
            when_not_to_use: &["Standard cursors", "Simple interactions", "Basic pointers"],
            related_components: &["pointer-highlight", "lens"],
        }),
    },
    Component {
        name: "pointer-highlight",
        category: "cursor",
        description: "A component that highlights text when it's in view",
        context: Some(ComponentContext {
            use_cases: &["Custom cursors", "Cursor effects", "Interactive cursors", "Text highlights"],
            when_to_use: &["Custom cursors", "Text highlights", "Cursor effects"],
            when_not_to_use: &["Standard cursors", "Simple interactions", "Basic pointers"],
            related_components: &["following-pointer", "lens"],
        }),
    },
    Component {
        name: "lens",
        category: "cursor",
        description: "A lens component to zoom into images, videos, or practically anything",
        context: Some(ComponentContext {
            use_cases: &["Custom cursors", "Cursor effects", "Interactive cursors", "Zoom effects"],
            when_to_use: &["Custom cursors", "Zoom effects", "Cursor effects"],
            when_not_to_use: &["Standard cursors", "Simple interactions", "Basic pointers"],
            related_components: &["following-pointer", "pointer-highlight"],
        }),
    },
    Component {
        name: "3d-pin",
        category: "3d",
        description: "A gradient pin that animates on hover",
        context: Some(ComponentContext {
            use_cases: &["3D effects", "3D animations", "3D displays", "Pin effects"],
            when_to_use: &["3D effects", "Pin displays", "3D animations"],
            when_not_to_use: &["2D displays", "Simple layouts", "Basic components"],
            related_components: &["3d-animated-pin", "3d-marquee"],
        }),
    },
    Component {
        name: "3d-marquee",
        category: "3d",
        description: "A 3D Marquee effect with grid",
        context: Some(ComponentContext {
            use_cases: &["3D effects", "3D animations", "3D displays", "Marquee effects"],
            when_to_use: &["3D effects", "Marquee displays", "3D animations"],
            when_not_to_use: &["2D displays", "Simple layouts", "Basic components"],
            related_components: &["3d-pin", "3d-animated-pin"],
        }),
    },
    Component {
        name: "3d-animated-pin",
        category: "3d",
        description: "A gradient pin that animates on hover",
        context: Some(ComponentContext {
            use_cases: &["3D effects", "3D animations", "3D displays", "Animated pins"],
            when_to_use: &["3D effects", "Animated pins", "3D animations"],
            when_not_to_use: &["2D displays", "Simple layouts", "Basic components"],
            related_components: &["3d-pin", "3d-marquee"],
        }),
    },
    Component {
        name: "feature-sections",
        category: "sections",
        description: "A set of feature sections ranging from bento grids to simple layouts",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Feature sections", "Section layouts", "Feature displays"],
            when_to_use: &["Hero sections", "Feature sections", "Section layouts"],
            when_not_to_use: &["Simple sections", "Static content", "Basic layouts"],
            related_components: &["hero-sections", "cards-sections"],
        }),
    },
    Component {
        name: "cards-sections",
        category: "sections",
        description: "A set of cards that can be used for different use cases",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Feature sections", "Section layouts", "Card sections"],
            when_to_use: &["Hero sections", "Card sections", "Section layouts"],
            when_not_to_use: &["Simple sections", "Static content", "Basic layouts"],
            related_components: &["feature-sections", "hero-sections"],
        }),
    },
    Component {
        name: "hero-sections",
        category: "sections",
        description: "A set of hero sections ranging from simple to complex layouts",
        context: Some(ComponentContext {
            use_cases: &["Hero sections", "Feature sections", "Section layouts", "Hero displays"],
            when_to_use: &["Hero sections", "Feature sections", "Section layouts"],
            when_not_to_use: &["Simple sections", "Static content", "Basic layouts"],
            related_components: &["feature-sections", "cards-sections"],
        }),
    },
];
