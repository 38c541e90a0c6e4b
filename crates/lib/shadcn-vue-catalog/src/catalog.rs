//! The fixed shadcn-vue catalog and the upstream locations it is served from.

use crate::models::ComponentKind;

pub const CDN_DOCS_BASE: &str = "https://cdn.jsdelivr.net/gh/unovue/shadcn-vue@dev/apps/www";
pub const RAW_DOCS_BASE: &str = "https://raw.githubusercontent.com/unovue/shadcn-vue/dev/apps/www";
pub const CDN_REGISTRY_BASE: &str =
    "https://cdn.jsdelivr.net/gh/unovue/shadcn-vue@dev/apps/v4/registry/new-york-v4/ui";
pub const RAW_REGISTRY_BASE: &str =
    "https://raw.githubusercontent.com/unovue/shadcn-vue/dev/apps/v4/registry/new-york-v4/ui";
pub const CONTEXT7_API_BASE: &str = "https://context7.com/api";
pub const LIBRARY_ID: &str = "/unovue/shadcn-vue";

pub const DOCS_DIR: &str = "src/content/docs";
pub const DEMOS_DIR: &str = "src/registry/default/examples";

/// Marker the CDN embeds in its HTML 404 page.
pub const CDN_NOT_FOUND_MARKER: &str = r#"<div class="error-code">404</div>"#;
pub const NO_DOCUMENTATION: &str = "No documentation found for this component";
pub const NO_USAGE_EXAMPLES: &str = "No usage examples found for this component";

/// A catalog entry: kebab-case slug plus the one-line summary shown to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub description: &'static str,
}

const fn entry(name: &'static str, description: &'static str) -> CatalogEntry {
    CatalogEntry { name, description }
}

pub const COMPONENTS: &[CatalogEntry] = &[
    entry("accordion", "A vertically stacked set of interactive headings that each reveal a section of content."),
    entry("alert-dialog", "A modal dialog that interrupts the user with important content and expects a response."),
    entry("alert", "Displays a callout for user attention."),
    entry("aspect-ratio", "Displays content within a desired ratio."),
    entry("auto-form", "Automatically generate a form from Zod schema."),
    entry("avatar", "An image element with a fallback for representing the user."),
    entry("badge", "Displays a badge or a component that looks like a badge."),
    entry("breadcrumb", "Displays the path to the current resource using a hierarchy of links."),
    entry("button", "Displays a button or a component that looks like a button."),
    entry("calendar", "A date field component that allows users to enter and edit date."),
    entry("card", "Displays a card with header, content, and footer."),
    entry("carousel", "A carousel with motion and swipe built using Embla."),
    entry("checkbox", "A control that allows the user to toggle between checked and not checked."),
    entry("collapsible", "An interactive component which expands/collapses a panel."),
    entry("combobox", "Autocomplete input and command palette with a list of suggestions."),
    entry("command", "Fast, composable, unstyled command menu."),
    entry("context-menu", "Displays a menu to the user - such as a set of actions or functions - triggered by a button."),
    entry("data-table", "Powerful table and datagrids built using TanStack Table."),
    entry("date-picker", "A date picker component with range and presets."),
    entry("dialog", "A window overlaid on either the primary window or another dialog window, rendering the content underneath inert."),
    entry("drawer", "A drawer component for vue."),
    entry("dropdown-menu", "Displays a menu to the user - such as a set of actions or functions - triggered by a button."),
    entry("form", "Building forms with VeeValidate and Zod."),
    entry("hover-card", "For sighted users to preview content available behind a link."),
    entry("input", "Displays a form input field or a component that looks like an input field."),
    entry("label", "Renders an accessible label associated with controls."),
    entry("menubar", "A visually persistent menu common in desktop applications that provides quick access to a consistent set of commands."),
    entry("navigation-menu", "A collection of links for navigating websites."),
    entry("number-field", "A number field allows a user to enter a number and increment or decrement the value using stepper buttons."),
    entry("pagination", "Displays data in paged format and provides navigation between pages."),
    entry("pin-input", "Allows users to input a sequence of one-character alphanumeric inputs."),
    entry("popover", "Displays rich content in a portal, triggered by a button."),
    entry("progress", "Displays an indicator showing the completion progress of a task, typically displayed as a progress bar."),
    entry("radio-group", "A set of checkable buttons-known as radio buttons-where no more than one of the buttons can be checked at a time."),
    entry("range-calendar", "A calendar component that allows users to select a range of dates."),
    entry("resizable", "Accessible resizable panel groups and layouts with keyboard support."),
    entry("scroll-area", "Augments native scroll functionality for custom, cross-browser styling."),
    entry("select", "Displays a list of options for the user to pick from-triggered by a button."),
    entry("separator", "Visually or semantically separates content."),
    entry("sheet", "Extends the Dialog component to display content that complements the main content of the screen."),
    entry("sidebar", "A composable, themeable and customizable sidebar component."),
    entry("skeleton", "Use to show a placeholder while content is loading."),
    entry("slider", "An input where the user selects a value from within a given range."),
    entry("sonner", "An opinionated toast component for Vue."),
    entry("stepper", "A set of steps that are used to indicate progress through a multi-step process."),
    entry("switch", "A control that allows the user to toggle between checked and not checked."),
    entry("table", "A responsive table component."),
    entry("tabs", "A set of layered sections of content-known as tab panels-that are displayed one at a time."),
    entry("tags-input", "Tag inputs render tags inside an input, followed by an actual text input."),
    entry("textarea", "Displays a form textarea or a component that looks like a textarea."),
    entry("toast", "A succinct message that is displayed temporarily."),
    entry("toggle", "A two-state button that can be either on or off."),
    entry("toggle-group", "A set of two-state buttons that can be toggled on or off."),
    entry("tooltip", "A popup that displays information related to an element when the element receives keyboard focus or the mouse hovers over it."),
    entry("typography", "Styles for headings, paragraphs, lists...etc"),
];

pub const CHARTS: &[CatalogEntry] = &[
    entry(
        "area",
        "An area chart shows data over time as filled areas under a line.",
    ),
    entry(
        "bar",
        "A bar chart compares quantities across categories with rectangular bars.",
    ),
    entry(
        "donut",
        "A donut chart shows proportions in a ring, like a pie chart with a hollow center.",
    ),
    entry(
        "line",
        "A line chart connects data points to show trends along a continuous axis.",
    ),
];

/// Demo files published under [`DEMOS_DIR`].
pub const DEMOS: &[&str] = &[
    "AccordionDemo.vue",
    "AlertDemo.vue",
    "AlertDestructiveDemo.vue",
    "AlertDialogDemo.vue",
    "AreaChartCustomTooltip.vue",
    "AreaChartDemo.vue",
    "AreaChartSparkline.vue",
    "AspectRatioDemo.vue",
    "AutoFormApi.vue",
    "AutoFormArray.vue",
    "AutoFormBasic.vue",
    "AutoFormConfirmPassword.vue",
    "AutoFormControlled.vue",
    "AutoFormDependencies.vue",
    "AutoFormInputWithoutLabel.vue",
    "AutoFormSubObject.vue",
    "AvatarDemo.vue",
    "BadgeDemo.vue",
    "BadgeDestructiveDemo.vue",
    "BadgeOutlineDemo.vue",
    "BadgeSecondaryDemo.vue",
    "BarChartCustomTooltip.vue",
    "BarChartDemo.vue",
    "BarChartRounded.vue",
    "BarChartStacked.vue",
    "BreadcrumbDemo.vue",
    "BreadcrumbDropdown.vue",
    "BreadcrumbEllipsisDemo.vue",
    "BreadcrumbLinkDemo.vue",
    "BreadcrumbResponsive.vue",
    "BreadcrumbSeparatorDemo.vue",
    "ButtonAsChildDemo.vue",
    "ButtonDemo.vue",
    "ButtonDestructiveDemo.vue",
    "ButtonGhostDemo.vue",
    "ButtonIconDemo.vue",
    "ButtonLinkDemo.vue",
    "ButtonLoadingDemo.vue",
    "ButtonOutlineDemo.vue",
    "ButtonSecondaryDemo.vue",
    "ButtonWithIconDemo.vue",
    "CalendarDemo.vue",
    "CalendarForm.vue",
    "CalendarWithSelect.vue",
    "CardChat.vue",
    "CardDemo.vue",
    "CardFormDemo.vue",
    "CardStats.vue",
    "CardWithForm.vue",
    "Cards",
    "CarouselApi.vue",
    "CarouselDemo.vue",
    "CarouselOrientation.vue",
    "CarouselPlugin.vue",
    "CarouselSize.vue",
    "CarouselSpacing.vue",
    "CarouselThumbnails.vue",
    "CheckboxDemo.vue",
    "CheckboxDisabled.vue",
    "CheckboxFormMultiple.vue",
    "CheckboxFormSingle.vue",
    "CheckboxWithText.vue",
    "CollapsibleDemo.vue",
    "ComboboxDemo.vue",
    "ComboboxDropdownMenu.vue",
    "ComboboxForm.vue",
    "ComboboxPopover.vue",
    "ComboboxResponsive.vue",
    "ComboboxTrigger.vue",
    "CommandDemo.vue",
    "CommandDialogDemo.vue",
    "CommandDropdownMenu.vue",
    "CommandForm.vue",
    "CommandPopover.vue",
    "CommandResponsive.vue",
    "ContextMenuDemo.vue",
    "CustomChartTooltip.vue",
    "DataTableColumnPinningDemo.vue",
    "DataTableDemo.vue",
    "DataTableDemoColumn.vue",
    "DataTableReactiveDemo.vue",
    "DatePickerDemo.vue",
    "DatePickerForm.vue",
    "DatePickerWithIndependentMonths.vue",
    "DatePickerWithPresets.vue",
    "DatePickerWithRange.vue",
    "DialogCustomCloseButton.vue",
    "DialogDemo.vue",
    "DialogForm.vue",
    "DialogScrollBodyDemo.vue",
    "DialogScrollOverlayDemo.vue",
    "DonutChartColor.vue",
    "DonutChartCustomTooltip.vue",
    "DonutChartDemo.vue",
    "DonutChartPie.vue",
    "DrawerDemo.vue",
    "DrawerDialog.vue",
    "DropdownMenuCheckboxes.vue",
    "DropdownMenuDemo.vue",
    "DropdownMenuRadioGroup.vue",
    "HoverCardDemo.vue",
    "InputDemo.vue",
    "InputDisabled.vue",
    "InputFile.vue",
    "InputForm.vue",
    "InputFormAutoAnimate.vue",
    "InputWithButton.vue",
    "InputWithIcon.vue",
    "InputWithLabel.vue",
    "LabelDemo.vue",
    "LineChartCustomTooltip.vue",
    "LineChartDemo.vue",
    "LineChartSparkline.vue",
    "MenubarDemo.vue",
    "NavigationMenuDemo.vue",
    "NumberFieldCurrency.vue",
    "NumberFieldDecimal.vue",
    "NumberFieldDemo.vue",
    "NumberFieldDisabled.vue",
    "NumberFieldForm.vue",
    "NumberFieldPercentage.vue",
    "PaginationDemo.vue",
    "PinInputControlled.vue",
    "PinInputDemo.vue",
    "PinInputDisabled.vue",
    "PinInputFormDemo.vue",
    "PinInputSeparatorDemo.vue",
    "PopoverDemo.vue",
    "ProgressDemo.vue",
    "RadioGroupDemo.vue",
    "RadioGroupForm.vue",
    "RangeCalendarDemo.vue",
    "ResizableDemo.vue",
    "ResizableHandleDemo.vue",
    "ResizableVerticalDemo.vue",
    "ScrollAreaDemo.vue",
    "ScrollAreaHorizontalDemo.vue",
    "SelectDemo.vue",
    "SelectForm.vue",
    "SelectScrollable.vue",
    "SeparatorDemo.vue",
    "SheetDemo.vue",
    "SheetSideDemo.vue",
    "SkeletonCard.vue",
    "SkeletonDemo.vue",
    "SliderDemo.vue",
    "SliderForm.vue",
    "SonnerDemo.vue",
    "SonnerWithDialog.vue",
    "StepperDemo.vue",
    "StepperForm.vue",
    "StepperHorizental.vue",
    "StepperVertical.vue",
    "SwitchDemo.vue",
    "SwitchForm.vue",
    "TableDemo.vue",
    "TabsDemo.vue",
    "TabsVerticalDemo.vue",
    "TagsInputComboboxDemo.vue",
    "TagsInputDemo.vue",
    "TagsInputFormDemo.vue",
    "TextareaDemo.vue",
    "TextareaDisabled.vue",
    "TextareaForm.vue",
    "TextareaWithButton.vue",
    "TextareaWithLabel.vue",
    "TextareaWithText.vue",
    "ToastDemo.vue",
    "ToastDestructive.vue",
    "ToastSimple.vue",
    "ToastWithAction.vue",
    "ToastWithTitle.vue",
    "ToggleDemo.vue",
    "ToggleDisabledDemo.vue",
    "ToggleGroupDemo.vue",
    "ToggleGroupDisabledDemo.vue",
    "ToggleGroupLargeDemo.vue",
    "ToggleGroupOutlineDemo.vue",
    "ToggleGroupSingleDemo.vue",
    "ToggleGroupSmallDemo.vue",
    "ToggleItalicDemo.vue",
    "ToggleItalicWithTextDemo.vue",
    "ToggleLargeDemo.vue",
    "ToggleSmallDemo.vue",
    "TooltipDemo.vue",
    "TypographyBlockquote.vue",
    "TypographyDemo.vue",
    "TypographyH1.vue",
    "TypographyH2.vue",
    "TypographyH3.vue",
    "TypographyH4.vue",
    "TypographyInlineCode.vue",
    "TypographyLarge.vue",
    "TypographyLead.vue",
    "TypographyList.vue",
    "TypographyMuted.vue",
    "TypographyP.vue",
    "TypographySmall.vue",
    "TypographyTable.vue",
];

/// Looks a name up in the requested catalog section.
#[must_use]
pub fn find(kind: ComponentKind, name: &str) -> Option<&'static CatalogEntry> {
    entries(kind).iter().find(|entry| entry.name == name)
}

#[must_use]
pub const fn entries(kind: ComponentKind) -> &'static [CatalogEntry] {
    match kind {
        ComponentKind::Components => COMPONENTS,
        ComponentKind::Charts => CHARTS,
    }
}

/// Returns the section a name belongs to, components first.
#[must_use]
pub fn kind_of(name: &str) -> Option<ComponentKind> {
    [ComponentKind::Components, ComponentKind::Charts]
        .into_iter()
        .find(|kind| find(*kind, name).is_some())
}

#[must_use]
pub fn is_valid_component(name: &str) -> bool {
    kind_of(name).is_some()
}

/// `aspect-ratio` -> `AspectRatio`.
#[must_use]
pub fn kebab_to_pascal(name: &str) -> String {
    name.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect()
}

/// Demo files belonging to a component.
///
/// A demo belongs to the component whose Pascal-case name is its longest
/// matching prefix, so `AlertDialogDemo.vue` is not listed under `alert`.
#[must_use]
pub fn demos_for(name: &str) -> Vec<&'static str> {
    let prefix = kebab_to_pascal(name);
    if prefix.is_empty() {
        return Vec::new();
    }
    let longer: Vec<String> = COMPONENTS
        .iter()
        .chain(CHARTS)
        .map(|entry| kebab_to_pascal(entry.name))
        .filter(|other| other.len() > prefix.len() && other.starts_with(&prefix))
        .collect();

    DEMOS
        .iter()
        .copied()
        .filter(|demo| {
            demo.ends_with(".vue")
                && demo.starts_with(&prefix)
                && !longer.iter().any(|other| demo.starts_with(other.as_str()))
        })
        .collect()
}
