//! 8bitcn component catalog, with usage context for RPG projects.
//!
//! Source: <https://www.8bitcn.com/docs/components>
//!
//! Style domain: `rpg_8bit`; preferred theme: `rpg_8bit`.

use super::{Component, ComponentContext};

/// All 8bitcn components.
pub static EIGHTBIT_COMPONENTS: &[Component] = &[
    Component {
        name: "accordion",
        category: "layout",
        description: "A vertically stacked set of interactive headings",
        context: Some(ComponentContext {
            use_cases: &["RPG menus", "Game settings", "Collapsible content", "8-bit UI sections"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Game menus"],
            when_not_to_use: &["Modern web UI", "Simple lists", "Non-retro designs"],
            related_components: &["collapsible", "tabs"],
        }),
    },
    Component {
        name: "alert",
        category: "feedback",
        description: "Displays a callout for user attention",
        context: Some(ComponentContext {
            use_cases: &["Game notifications", "RPG alerts", "8-bit messages", "Game feedback"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Game notifications"],
            when_not_to_use: &["Modern web UI", "Simple notifications", "Non-retro designs"],
            related_components: &["toast", "alert-dialog"],
        }),
    },
    Component {
        name: "alert-dialog",
        category: "overlay",
        description: "A modal dialog that interrupts the user",
        context: Some(ComponentContext {
            use_cases: &["Game confirmations", "RPG dialogs", "8-bit modals", "Game decisions"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Game confirmations"],
            when_not_to_use: &["Modern web UI", "Simple dialogs", "Non-retro designs"],
            related_components: &["dialog", "alert"],
        }),
    },
    Component {
        name: "avatar",
        category: "display",
        description: "An image element with a fallback",
        context: Some(ComponentContext {
            use_cases: &["Player avatars", "Character displays", "RPG characters", "8-bit portraits"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Character displays"],
            when_not_to_use: &["Modern web UI", "Simple images", "Non-retro designs"],
            related_components: &["badge", "item"],
        }),
    },
    Component {
        name: "badge",
        category: "display",
        description: "Displays a badge or a component that looks like a badge",
        context: Some(ComponentContext {
            use_cases: &["Game badges", "RPG status", "8-bit labels", "Game indicators"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Status indicators"],
            when_not_to_use: &["Modern web UI", "Simple badges", "Non-retro designs"],
            related_components: &["avatar", "item"],
        }),
    },
    Component {
        name: "breadcrumb",
        category: "navigation",
        description: "Displays the path to the current resource",
        context: Some(ComponentContext {
            use_cases: &["Game navigation", "RPG paths", "8-bit navigation", "Game hierarchy"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Game navigation"],
            when_not_to_use: &["Modern web UI", "Simple navigation", "Non-retro designs"],
            related_components: &["navigation-menu", "tabs"],
        }),
    },
    Component {
        name: "button",
        category: "form",
        description: "Displays a button or a component that looks like a button",
        context: Some(ComponentContext {
            use_cases: &["Game buttons", "RPG actions", "8-bit buttons", "Game controls"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Game controls"],
            when_not_to_use: &["Modern web UI", "Simple buttons", "Non-retro designs"],
            related_components: &["toggle", "retro-switcher"],
        }),
    },
    Component {
        name: "calendar",
        category: "form",
        description: "A date field component",
        context: Some(ComponentContext {
            use_cases: &["Game calendars", "RPG date selection", "8-bit calendars", "Game scheduling"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Date selection"],
            when_not_to_use: &["Modern web UI", "Simple date inputs", "Non-retro designs"],
            related_components: &["date-picker", "input"],
        }),
    },
    Component {
        name: "card",
        category: "layout",
        description: "Displays a card with header, content, and footer",
        context: Some(ComponentContext {
            use_cases: &["Game cards", "RPG cards", "8-bit cards", "Game displays"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Card displays"],
            when_not_to_use: &["Modern web UI", "Simple cards", "Non-retro designs"],
            related_components: &["item", "badge"],
        }),
    },
    Component {
        name: "carousel",
        category: "display",
        description: "A carousel with motion and swipe built using Embla",
        context: Some(ComponentContext {
            use_cases: &["Game carousels", "RPG displays", "8-bit carousels", "Game galleries"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Image galleries"],
            when_not_to_use: &["Modern web UI", "Simple lists", "Non-retro designs"],
            related_components: &["tabs", "scroll-area"],
        }),
    },
    Component {
        name: "chart",
        category: "display",
        description: "Chart components built with Recharts",
        context: Some(ComponentContext {
            use_cases: &["Game stats", "RPG charts", "8-bit charts", "Game data"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Data visualization"],
            when_not_to_use: &["Modern web UI", "Simple charts", "Non-retro designs"],
            related_components: &["progress", "health-bar"],
        }),
    },
    Component {
        name: "checkbox",
        category: "form",
        description: "A control that allows the user to toggle between checked and not checked",
        context: Some(ComponentContext {
            use_cases: &["Game checkboxes", "RPG options", "8-bit checkboxes", "Game settings"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Multiple selections"],
            when_not_to_use: &["Modern web UI", "Simple checkboxes", "Non-retro designs"],
            related_components: &["radio-group", "switch"],
        }),
    },
    Component {
        name: "collapsible",
        category: "layout",
        description: "An interactive component which expands/collapses a panel",
        context: Some(ComponentContext {
            use_cases: &["Game panels", "RPG sections", "8-bit collapsibles", "Game menus"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Expandable content"],
            when_not_to_use: &["Modern web UI", "Simple panels", "Non-retro designs"],
            related_components: &["accordion", "sheet"],
        }),
    },
    Component {
        name: "combo-box",
        category: "form",
        description: "Combobox component for autocomplete",
        context: Some(ComponentContext {
            use_cases: &["Game search", "RPG autocomplete", "8-bit combobox", "Game selection"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Searchable selection"],
            when_not_to_use: &["Modern web UI", "Simple selects", "Non-retro designs"],
            related_components: &["select", "input"],
        }),
    },
    Component {
        name: "command",
        category: "navigation",
        description: "Command palette component",
        context: Some(ComponentContext {
            use_cases: &["Game commands", "RPG palettes", "8-bit commands", "Game shortcuts"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Command palettes"],
            when_not_to_use: &["Modern web UI", "Simple menus", "Non-retro designs"],
            related_components: &["popover", "dialog"],
        }),
    },
    Component {
        name: "context-menu",
        category: "overlay",
        description: "Displays a menu to the user",
        context: Some(ComponentContext {
            use_cases: &["Game menus", "RPG context menus", "8-bit menus", "Game actions"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Context actions"],
            when_not_to_use: &["Modern web UI", "Simple menus", "Non-retro designs"],
            related_components: &["dropdown-menu", "menubar"],
        }),
    },
    Component {
        name: "date-picker",
        category: "form",
        description: "A date picker component",
        context: Some(ComponentContext {
            use_cases: &["Game dates", "RPG date selection", "8-bit date picker", "Game scheduling"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Date selection"],
            when_not_to_use: &["Modern web UI", "Simple date inputs", "Non-retro designs"],
            related_components: &["calendar", "popover"],
        }),
    },
    Component {
        name: "dialog",
        category: "overlay",
        description: "A window overlaid on either the primary window",
        context: Some(ComponentContext {
            use_cases: &["Game dialogs", "RPG modals", "8-bit dialogs", "Game windows"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Modal dialogs"],
            when_not_to_use: &["Modern web UI", "Simple dialogs", "Non-retro designs"],
            related_components: &["alert-dialog", "sheet"],
        }),
    },
    Component {
        name: "drawer",
        category: "overlay",
        description: "A drawer component for mobile",
        context: Some(ComponentContext {
            use_cases: &["Game drawers", "RPG side panels", "8-bit drawers", "Game mobile UI"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Mobile panels"],
            when_not_to_use: &["Modern web UI", "Simple drawers", "Non-retro designs"],
            related_components: &["sheet", "sidebar"],
        }),
    },
    Component {
        name: "dropdown-menu",
        category: "overlay",
        description: "Displays a menu to the user",
        context: Some(ComponentContext {
            use_cases: &["Game menus", "RPG dropdowns", "8-bit menus", "Game actions"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Action menus"],
            when_not_to_use: &["Modern web UI", "Simple menus", "Non-retro designs"],
            related_components: &["context-menu", "menubar"],
        }),
    },
    Component {
        name: "empty",
        category: "display",
        description: "Displays an empty state",
        context: Some(ComponentContext {
            use_cases: &["Game empty states", "RPG empty displays", "8-bit empty states", "Game placeholders"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Empty states"],
            when_not_to_use: &["Modern web UI", "Simple empty states", "Non-retro designs"],
            related_components: &["skeleton", "alert"],
        }),
    },
    Component {
        name: "enemy-health",
        category: "rpg",
        description: "Enemy health bar component for RPG games",
        context: Some(ComponentContext {
            use_cases: &["RPG combat", "Game health bars", "Enemy displays", "Battle UI"],
            when_to_use: &["RPG games", "Combat interfaces", "Enemy displays"],
            when_not_to_use: &["Non-RPG games", "Simple displays", "Modern web UI"],
            related_components: &["health-bar", "mana-bar", "progress"],
        }),
    },
    Component {
        name: "health-bar",
        category: "rpg",
        description: "Health bar component for RPG games",
        context: Some(ComponentContext {
            use_cases: &["RPG combat", "Game health bars", "Player health", "Battle UI"],
            when_to_use: &["RPG games", "Combat interfaces", "Health displays"],
            when_not_to_use: &["Non-RPG games", "Simple displays", "Modern web UI"],
            related_components: &["enemy-health", "mana-bar", "progress"],
        }),
    },
    Component {
        name: "hover-card",
        category: "overlay",
        description: "For sighted users to preview content available behind a link",
        context: Some(ComponentContext {
            use_cases: &["Game tooltips", "RPG previews", "8-bit hover cards", "Game information"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Hover information"],
            when_not_to_use: &["Modern web UI", "Simple tooltips", "Non-retro designs"],
            related_components: &["popover", "tooltip"],
        }),
    },
    Component {
        name: "input",
        category: "form",
        description: "Displays a form input field",
        context: Some(ComponentContext {
            use_cases: &["Game inputs", "RPG forms", "8-bit inputs", "Game text fields"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Text input"],
            when_not_to_use: &["Modern web UI", "Simple inputs", "Non-retro designs"],
            related_components: &["textarea", "label"],
        }),
    },
    Component {
        name: "input-otp",
        category: "form",
        description: "Input component for one-time passwords",
        context: Some(ComponentContext {
            use_cases: &["Game codes", "RPG verification", "8-bit OTP", "Game authentication"],
            when_to_use: &["RPG interfaces", "8-bit UI", "OTP codes"],
            when_not_to_use: &["Modern web UI", "Simple inputs", "Non-retro designs"],
            related_components: &["input", "form"],
        }),
    },
    Component {
        name: "item",
        category: "display",
        description: "Item component",
        context: Some(ComponentContext {
            use_cases: &["Game items", "RPG items", "8-bit items", "Game inventory"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Item displays"],
            when_not_to_use: &["Modern web UI", "Simple items", "Non-retro designs"],
            related_components: &["card", "badge"],
        }),
    },
    Component {
        name: "kbd",
        category: "display",
        description: "Keyboard key component",
        context: Some(ComponentContext {
            use_cases: &["Game shortcuts", "RPG key displays", "8-bit keyboard", "Game controls"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Keyboard shortcuts"],
            when_not_to_use: &["Modern web UI", "Simple keys", "Non-retro designs"],
            related_components: &["tooltip", "command"],
        }),
    },
    Component {
        name: "label",
        category: "form",
        description: "Renders an accessible label associated with controls",
        context: Some(ComponentContext {
            use_cases: &["Game labels", "RPG form labels", "8-bit labels", "Game forms"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Form labels"],
            when_not_to_use: &["Modern web UI", "Simple labels", "Non-retro designs"],
            related_components: &["input", "form"],
        }),
    },
    Component {
        name: "mana-bar",
        category: "rpg",
        description: "Mana bar component for RPG games",
        context: Some(ComponentContext {
            use_cases: &["RPG combat", "Game mana bars", "Magic displays", "Battle UI"],
            when_to_use: &["RPG games", "Combat interfaces", "Magic displays"],
            when_not_to_use: &["Non-RPG games", "Simple displays", "Modern web UI"],
            related_components: &["health-bar", "enemy-health", "progress"],
        }),
    },
    Component {
        name: "menubar",
        category: "navigation",
        description: "A visually persistent menu common in desktop applications",
        context: Some(ComponentContext {
            use_cases: &["Game menus", "RPG menubars", "8-bit menus", "Game navigation"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Persistent menus"],
            when_not_to_use: &["Modern web UI", "Simple menus", "Non-retro designs"],
            related_components: &["navigation-menu", "dropdown-menu"],
        }),
    },
    Component {
        name: "navigation-menu",
        category: "navigation",
        description: "A collection of links for navigating websites",
        context: Some(ComponentContext {
            use_cases: &["Game navigation", "RPG menus", "8-bit navigation", "Game links"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Site navigation"],
            when_not_to_use: &["Modern web UI", "Simple navigation", "Non-retro designs"],
            related_components: &["menubar", "breadcrumb"],
        }),
    },
    Component {
        name: "pagination",
        category: "navigation",
        description: "Pagination component",
        context: Some(ComponentContext {
            use_cases: &["Game pagination", "RPG pages", "8-bit pagination", "Game lists"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Paginated content"],
            when_not_to_use: &["Modern web UI", "Simple pagination", "Non-retro designs"],
            related_components: &["table", "data-table"],
        }),
    },
    Component {
        name: "popover",
        category: "overlay",
        description: "Displays rich content in a portal",
        context: Some(ComponentContext {
            use_cases: &["Game popovers", "RPG overlays", "8-bit popovers", "Game information"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Non-blocking information"],
            when_not_to_use: &["Modern web UI", "Simple popovers", "Non-retro designs"],
            related_components: &["tooltip", "dialog"],
        }),
    },
    Component {
        name: "progress",
        category: "feedback",
        description: "Displays an indicator showing the completion progress of a task",
        context: Some(ComponentContext {
            use_cases: &["Game progress", "RPG progress bars", "8-bit progress", "Game loading"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Progress indicators"],
            when_not_to_use: &["Modern web UI", "Simple progress", "Non-retro designs"],
            related_components: &["health-bar", "mana-bar", "spinner"],
        }),
    },
    Component {
        name: "radio-group",
        category: "form",
        description: "A set of checkable buttons—known as radio buttons",
        context: Some(ComponentContext {
            use_cases: &["Game options", "RPG radio groups", "8-bit radio", "Game selection"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Single selection"],
            when_not_to_use: &["Modern web UI", "Simple radio", "Non-retro designs"],
            related_components: &["checkbox", "select"],
        }),
    },
    Component {
        name: "resizable",
        category: "layout",
        description: "Accessible resizable panel groups and layouts",
        context: Some(ComponentContext {
            use_cases: &["Game panels", "RPG resizable", "8-bit panels", "Game layouts"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Resizable layouts"],
            when_not_to_use: &["Modern web UI", "Simple layouts", "Non-retro designs"],
            related_components: &["sidebar", "separator"],
        }),
    },
    Component {
        name: "retro-switcher",
        category: "form",
        description: "Retro-style switch component",
        context: Some(ComponentContext {
            use_cases: &["Game switches", "RPG toggles", "8-bit switches", "Game settings"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Toggle switches"],
            when_not_to_use: &["Modern web UI", "Simple switches", "Non-retro designs"],
            related_components: &["switch", "toggle"],
        }),
    },
    Component {
        name: "scroll-area",
        category: "layout",
        description: "Augments native scroll functionality for custom styling",
        context: Some(ComponentContext {
            use_cases: &["Game scroll areas", "RPG scroll", "8-bit scroll", "Game content"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Scrollable areas"],
            when_not_to_use: &["Modern web UI", "Simple scroll", "Non-retro designs"],
            related_components: &["card", "separator"],
        }),
    },
    Component {
        name: "select",
        category: "form",
        description: "Displays a list of options for the user to pick from",
        context: Some(ComponentContext {
            use_cases: &["Game selects", "RPG dropdowns", "8-bit selects", "Game selection"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Option selection"],
            when_not_to_use: &["Modern web UI", "Simple selects", "Non-retro designs"],
            related_components: &["combo-box", "radio-group"],
        }),
    },
    Component {
        name: "separator",
        category: "layout",
        description: "Visually or semantically separates content",
        context: Some(ComponentContext {
            use_cases: &["Game separators", "RPG dividers", "8-bit separators", "Game layouts"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Content separation"],
            when_not_to_use: &["Modern web UI", "Simple separators", "Non-retro designs"],
            related_components: &["card", "divider"],
        }),
    },
    Component {
        name: "sheet",
        category: "overlay",
        description: "Extends the Dialog component to display content that complements the main content",
        context: Some(ComponentContext {
            use_cases: &["Game sheets", "RPG side panels", "8-bit sheets", "Game panels"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Side panels"],
            when_not_to_use: &["Modern web UI", "Simple sheets", "Non-retro designs"],
            related_components: &["dialog", "drawer"],
        }),
    },
    Component {
        name: "sidebar",
        category: "layout",
        description: "Sidebar component",
        context: Some(ComponentContext {
            use_cases: &["Game sidebars", "RPG sidebars", "8-bit sidebars", "Game navigation"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Side navigation"],
            when_not_to_use: &["Modern web UI", "Simple sidebars", "Non-retro designs"],
            related_components: &["sheet", "navigation-menu"],
        }),
    },
    Component {
        name: "skeleton",
        category: "feedback",
        description: "Use to show a placeholder while content is loading",
        context: Some(ComponentContext {
            use_cases: &["Game loading", "RPG skeletons", "8-bit loading", "Game placeholders"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Loading states"],
            when_not_to_use: &["Modern web UI", "Simple loading", "Non-retro designs"],
            related_components: &["spinner", "progress"],
        }),
    },
    Component {
        name: "slider",
        category: "form",
        description: "An input where the user selects a value from within a given range",
        context: Some(ComponentContext {
            use_cases: &["Game sliders", "RPG sliders", "8-bit sliders", "Game controls"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Range selection"],
            when_not_to_use: &["Modern web UI", "Simple sliders", "Non-retro designs"],
            related_components: &["input", "select"],
        }),
    },
    Component {
        name: "spinner",
        category: "feedback",
        description: "Spinner loading component",
        context: Some(ComponentContext {
            use_cases: &["Game loading", "RPG spinners", "8-bit loading", "Game indicators"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Loading states"],
            when_not_to_use: &["Modern web UI", "Simple loading", "Non-retro designs"],
            related_components: &["skeleton", "progress"],
        }),
    },
    Component {
        name: "switch",
        category: "form",
        description: "A control that allows the user to toggle between checked and not checked",
        context: Some(ComponentContext {
            use_cases: &["Game switches", "RPG toggles", "8-bit switches", "Game settings"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Toggle switches"],
            when_not_to_use: &["Modern web UI", "Simple switches", "Non-retro designs"],
            related_components: &["retro-switcher", "toggle"],
        }),
    },
    Component {
        name: "table",
        category: "display",
        description: "A responsive table component",
        context: Some(ComponentContext {
            use_cases: &["Game tables", "RPG tables", "8-bit tables", "Game data"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Tabular data"],
            when_not_to_use: &["Modern web UI", "Simple tables", "Non-retro designs"],
            related_components: &["data-table", "pagination"],
        }),
    },
    Component {
        name: "tabs",
        category: "layout",
        description: "A set of layered sections of content",
        context: Some(ComponentContext {
            use_cases: &["Game tabs", "RPG tabs", "8-bit tabs", "Game navigation"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Tab navigation"],
            when_not_to_use: &["Modern web UI", "Simple tabs", "Non-retro designs"],
            related_components: &["accordion", "navigation-menu"],
        }),
    },
    Component {
        name: "textarea",
        category: "form",
        description: "Displays a form textarea",
        context: Some(ComponentContext {
            use_cases: &["Game textareas", "RPG text areas", "8-bit textareas", "Game text input"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Multi-line text"],
            when_not_to_use: &["Modern web UI", "Simple textareas", "Non-retro designs"],
            related_components: &["input", "form"],
        }),
    },
    Component {
        name: "theme-selector",
        category: "form",
        description: "Theme selector component",
        context: Some(ComponentContext {
            use_cases: &["Game themes", "RPG theme selection", "8-bit themes", "Game customization"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Theme selection"],
            when_not_to_use: &["Modern web UI", "Simple selectors", "Non-retro designs"],
            related_components: &["select", "toggle"],
        }),
    },
    Component {
        name: "toast",
        category: "feedback",
        description: "A succinct message that is displayed temporarily",
        context: Some(ComponentContext {
            use_cases: &["Game notifications", "RPG toasts", "8-bit notifications", "Game messages"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Temporary notifications"],
            when_not_to_use: &["Modern web UI", "Simple toasts", "Non-retro designs"],
            related_components: &["alert", "sonner"],
        }),
    },
    Component {
        name: "toggle",
        category: "form",
        description: "A two-state button that can be either on or off",
        context: Some(ComponentContext {
            use_cases: &["Game toggles", "RPG toggles", "8-bit toggles", "Game switches"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Toggle states"],
            when_not_to_use: &["Modern web UI", "Simple toggles", "Non-retro designs"],
            related_components: &["switch", "retro-switcher"],
        }),
    },
    Component {
        name: "toggle-group",
        category: "form",
        description: "A set of two-state buttons that can be toggled on or off",
        context: Some(ComponentContext {
            use_cases: &["Game toggle groups", "RPG toggle groups", "8-bit toggles", "Game options"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Toggle groups"],
            when_not_to_use: &["Modern web UI", "Simple toggles", "Non-retro designs"],
            related_components: &["toggle", "button-group"],
        }),
    },
    Component {
        name: "tooltip",
        category: "overlay",
        description: "A popup that displays information related to an element",
        context: Some(ComponentContext {
            use_cases: &["Game tooltips", "RPG tooltips", "8-bit tooltips", "Game information"],
            when_to_use: &["RPG interfaces", "8-bit UI", "Help text"],
            when_not_to_use: &["Modern web UI", "Simple tooltips", "Non-retro designs"],
            related_components: &["popover", "hover-card"],
        }),
    },
];
