//! shadcn/ui component catalog.
//!
//! Source: <https://ui.shadcn.com/docs/components>

use super::{entry, Component};

/// All shadcn/ui components.
pub static SHADCN_COMPONENTS: &[Component] = &[
    entry("accordion", "layout", "A vertically stacked set of interactive headings"),
    entry("alert-dialog", "overlay", "A modal dialog that interrupts the user"),
    entry("alert", "feedback", "Displays a callout for user attention"),
    entry("aspect-ratio", "layout", "Displays content within a desired ratio"),
    entry("avatar", "display", "An image element with a fallback for representing the user"),
    entry("badge", "display", "Displays a badge or a component that looks like a badge"),
    entry("breadcrumb", "navigation", "Displays the path to the current resource"),
    entry("button-group", "form", "A group of buttons"),
    entry("button", "form", "Displays a button or a component that looks like a button"),
    entry("calendar", "form", "A date field component"),
    entry("card", "layout", "Displays a card with header, content, and footer"),
    entry("carousel", "display", "A carousel with motion and swipe built using Embla"),
    entry("chart", "display", "Chart components built with Recharts"),
    entry("checkbox", "form", "A control that allows the user to toggle between checked and not checked"),
    entry("collapsible", "layout", "An interactive component which expands/collapses a panel"),
    entry("combobox", "form", "Combobox component for autocomplete"),
    entry("command", "navigation", "Command palette component"),
    entry("context-menu", "overlay", "Displays a menu to the user"),
    entry("data-table", "display", "A data table component with sorting and filtering"),
    entry("date-picker", "form", "A date picker component"),
    entry("dialog", "overlay", "A window overlaid on either the primary window or another dialog"),
    entry("drawer", "overlay", "A drawer component for mobile"),
    entry("dropdown-menu", "overlay", "Displays a menu to the user — such as a set of actions or functions"),
    entry("empty", "display", "Displays an empty state"),
    entry("field", "form", "A form field component"),
    entry("form", "form", "Form component built on top of React Hook Form"),
    entry("hover-card", "overlay", "For sighted users to preview content available behind a link"),
    entry("input-group", "form", "A group of inputs"),
    entry("input-otp", "form", "Input component for one-time passwords"),
    entry("input", "form", "Displays a form input field or a component that looks like an input field"),
    entry("item", "display", "Item component"),
    entry("kbd", "display", "Keyboard key component"),
    entry("label", "form", "Renders an accessible label associated with controls"),
    entry("menubar", "navigation", "A visually persistent menu common in desktop applications"),
    entry("native-select", "form", "A native select component"),
    entry("navigation-menu", "navigation", "A collection of links for navigating websites"),
    entry("pagination", "navigation", "Pagination component"),
    entry("popover", "overlay", "Displays rich content in a portal"),
    entry("progress", "feedback", "Displays an indicator showing the completion progress of a task"),
    entry("radio-group", "form", "A set of checkable buttons—known as radio buttons—where no more than one of the buttons can be checked"),
    entry("resizable", "layout", "Accessible resizable panel groups and layouts"),
    entry("scroll-area", "layout", "Augments native scroll functionality for custom styling"),
    entry("select", "form", "Displays a list of options for the user to pick from"),
    entry("separator", "layout", "Visually or semantically separates content"),
    entry("sheet", "overlay", "Extends the Dialog component to display content that complements the main content"),
    entry("sidebar", "layout", "Sidebar component"),
    entry("skeleton", "feedback", "Use to show a placeholder while content is loading"),
    entry("slider", "form", "An input where the user selects a value from within a given range"),
    entry("sonner", "feedback", "Toast notifications (Sonner)"),
    entry("spinner", "feedback", "Spinner loading component"),
    entry("switch", "form", "A control that allows the user to toggle between checked and not checked"),
    entry("table", "display", "A responsive table component"),
    entry("tabs", "layout", "A set of layered sections of content—known as tab panels—that are displayed one at a time"),
    entry("textarea", "form", "Displays a form textarea or a component that looks like a textarea"),
    entry("toast", "feedback", "A succinct message that is displayed temporarily"),
    entry("toggle-group", "form", "A set of two-state buttons that can be toggled on or off"),
    entry("toggle", "form", "A two-state button that can be either on or off"),
    entry("tooltip", "overlay", "A popup that displays information related to an element when the element receives keyboard focus or the mouse hovers over it"),
    entry("typography", "display", "Typography component"),
];
