//! Dusk Ember Light - the light counterpart
//! Warm paper background, the same ember accent family darkened for contrast

pub const THEME: &str = r##"{
    "name": "Dusk Ember Light",
    "type": "light",
    "colors": {
        "editor.background": "#faf6f1",
        "editor.foreground": "#33243f",
        "editor.selectionBackground": "#e8d9c5",
        "editor.lineHighlightBackground": "#f1e9e0",
        "editorLineNumber.foreground": "#a08f95",
        "editorLineNumber.activeForeground": "#6b5a77",
        "editorCursor.foreground": "#c2410c",

        "statusBar.background": "#efe6dc",
        "statusBar.foreground": "#4a3a56",

        "activityBar.background": "#f1e9e0",
        "activityBar.foreground": "#33243f",
        "activityBar.inactiveForeground": "#8a7a96",
        "activityBarBadge.background": "#c2410c",
        "activityBarBadge.foreground": "#faf6f1",

        "sideBar.background": "#f5efe8",
        "sideBar.foreground": "#4a3a56",
        "sideBarTitle.foreground": "#6b5a77",

        "tab.activeBackground": "#faf6f1",
        "tab.activeForeground": "#33243f",
        "tab.inactiveBackground": "#f1e9e0",
        "tab.inactiveForeground": "#8a7a96",

        "terminal.background": "#faf6f1",
        "terminal.foreground": "#33243f",

        "button.background": "#c2410c",
        "button.foreground": "#faf6f1",

        "input.background": "#ffffff",
        "input.foreground": "#33243f",
        "input.placeholderForeground": "#8a7a96",

        "list.activeSelectionBackground": "#e8d9c5",
        "list.activeSelectionForeground": "#33243f",

        "badge.background": "#c2410c",
        "badge.foreground": "#faf6f1",

        "errorForeground": "#c41e4f",
        "editorError.foreground": "#c41e4f",
        "editorWarning.foreground": "#9a6700",
        "editorInfo.foreground": "#1d4ed8",

        "gitDecoration.addedResourceForeground": "#3a7c1f",
        "gitDecoration.deletedResourceForeground": "#c41e4f",
        "gitDecoration.modifiedResourceForeground": "#9a6700",
        "gitDecoration.untrackedResourceForeground": "#0f766e",
        "gitDecoration.ignoredResourceForeground": "#a08f95",

        "focusBorder": "#c2410c"
    },
    "tokenColors": [
        {
            "name": "Comment",
            "scope": ["comment", "punctuation.definition.comment"],
            "settings": { "foreground": "#8a7a96", "fontStyle": "italic" }
        },
        {
            "name": "String",
            "scope": ["string", "string.quoted"],
            "settings": { "foreground": "#3a7c1f" }
        },
        {
            "name": "Keyword",
            "scope": ["keyword", "keyword.control", "storage.type", "storage.modifier"],
            "settings": { "foreground": "#c2410c" }
        },
        {
            "name": "Function",
            "scope": ["entity.name.function", "support.function"],
            "settings": { "foreground": "#b45309" }
        },
        {
            "name": "Variable",
            "scope": ["variable", "variable.other"],
            "settings": { "foreground": "#33243f" }
        },
        {
            "name": "Constant",
            "scope": ["constant", "constant.numeric", "constant.language"],
            "settings": { "foreground": "#7c3aed" }
        },
        {
            "name": "Type",
            "scope": ["entity.name.type", "entity.name.class", "support.type", "support.class"],
            "settings": { "foreground": "#1d4ed8" }
        },
        {
            "name": "Operator",
            "scope": ["keyword.operator"],
            "settings": { "foreground": "#4a3a56" }
        },
        {
            "name": "Punctuation",
            "scope": ["punctuation"],
            "settings": { "foreground": "#6b5a77" }
        },
        {
            "name": "Tag",
            "scope": ["entity.name.tag"],
            "settings": { "foreground": "#c41e4f" }
        },
        {
            "name": "Attribute",
            "scope": ["entity.other.attribute-name"],
            "settings": { "foreground": "#9a6700" }
        },
        {
            "name": "Invalid",
            "scope": ["invalid", "invalid.illegal"],
            "settings": { "foreground": "#c41e4f" }
        }
    ]
}
"##;
