//! Dusk Ember - the flagship theme
//! Deep violet dusk with ember-orange accents

pub const THEME: &str = r##"{
    "name": "Dusk Ember",
    "type": "dark",
    "colors": {
        "editor.background": "#1a0d26",
        "editor.foreground": "#f4f1f4",
        "editor.selectionBackground": "#3c2a52",
        "editor.lineHighlightBackground": "#241433",
        "editorLineNumber.foreground": "#5f4d73",
        "editorLineNumber.activeForeground": "#9d8ba8",
        "editorCursor.foreground": "#ff6b35",
        "editorWhitespace.foreground": "#2d1b3d",
        "editorIndentGuide.background": "#2d1b3d",

        "statusBar.background": "#120920",
        "statusBar.foreground": "#c5bdc8",
        "statusBar.debuggingBackground": "#ff6b35",
        "statusBar.debuggingForeground": "#1a0d26",

        "activityBar.background": "#150a20",
        "activityBar.foreground": "#f4f1f4",
        "activityBar.inactiveForeground": "#8b7a9b",
        "activityBarBadge.background": "#ff6b35",
        "activityBarBadge.foreground": "#1a0d26",

        "sideBar.background": "#150a20",
        "sideBar.foreground": "#c5bdc8",
        "sideBarTitle.foreground": "#9d8ba8",
        "sideBarSectionHeader.background": "#1f1130",
        "sideBarSectionHeader.foreground": "#c5bdc8",

        "tab.activeBackground": "#1a0d26",
        "tab.activeForeground": "#f4f1f4",
        "tab.inactiveBackground": "#150a20",
        "tab.inactiveForeground": "#8b7a9b",
        "tab.border": "#120920",

        "terminal.background": "#1a0d26",
        "terminal.foreground": "#f4f1f4",
        "terminal.ansiRed": "#ff5370",
        "terminal.ansiGreen": "#7fd962",
        "terminal.ansiYellow": "#ffcb6b",
        "terminal.ansiBlue": "#82aaff",

        "button.background": "#ff6b35",
        "button.foreground": "#1a0d26",
        "button.hoverBackground": "#ff8659",

        "input.background": "#241433",
        "input.foreground": "#f4f1f4",
        "input.placeholderForeground": "#8b7a9b",
        "input.border": "#3c2a52",

        "list.activeSelectionBackground": "#32204a",
        "list.activeSelectionForeground": "#f4f1f4",
        "list.inactiveSelectionBackground": "#241433",
        "list.hoverBackground": "#241433",

        "badge.background": "#ff6b35",
        "badge.foreground": "#1a0d26",

        "panel.background": "#150a20",
        "panelTitle.activeForeground": "#f4f1f4",
        "panelTitle.inactiveForeground": "#8b7a9b",

        "errorForeground": "#ff5370",
        "editorError.foreground": "#ff5370",
        "editorWarning.foreground": "#ffcb6b",
        "editorInfo.foreground": "#82aaff",

        "gitDecoration.addedResourceForeground": "#7fd962",
        "gitDecoration.deletedResourceForeground": "#ff5370",
        "gitDecoration.modifiedResourceForeground": "#ffcb6b",
        "gitDecoration.untrackedResourceForeground": "#56c8d8",
        "gitDecoration.ignoredResourceForeground": "#5f4d73",

        "focusBorder": "#ff6b35",
        "selection.background": "#3c2a52"
    },
    "tokenColors": [
        {
            "name": "Comment",
            "scope": ["comment", "punctuation.definition.comment"],
            "settings": { "foreground": "#6a5a7d", "fontStyle": "italic" }
        },
        {
            "name": "String",
            "scope": ["string", "string.quoted"],
            "settings": { "foreground": "#a6d176" }
        },
        {
            "name": "Keyword",
            "scope": ["keyword", "keyword.control", "storage.type", "storage.modifier"],
            "settings": { "foreground": "#ff6b35" }
        },
        {
            "name": "Function",
            "scope": ["entity.name.function", "support.function"],
            "settings": { "foreground": "#ffa94d" }
        },
        {
            "name": "Variable",
            "scope": ["variable", "variable.other"],
            "settings": { "foreground": "#f4f1f4" }
        },
        {
            "name": "Constant",
            "scope": ["constant", "constant.numeric", "constant.language"],
            "settings": { "foreground": "#d6a3ff" }
        },
        {
            "name": "Type",
            "scope": ["entity.name.type", "entity.name.class", "support.type", "support.class"],
            "settings": { "foreground": "#82aaff" }
        },
        {
            "name": "Operator",
            "scope": ["keyword.operator"],
            "settings": { "foreground": "#c5bdc8" }
        },
        {
            "name": "Punctuation",
            "scope": ["punctuation"],
            "settings": { "foreground": "#9d8ba8" }
        },
        {
            "name": "Tag",
            "scope": ["entity.name.tag"],
            "settings": { "foreground": "#ff5370" }
        },
        {
            "name": "Attribute",
            "scope": ["entity.other.attribute-name"],
            "settings": { "foreground": "#ffcb6b" }
        },
        {
            "name": "Decorator",
            "scope": ["meta.decorator", "entity.name.function.decorator"],
            "settings": { "foreground": "#d6a3ff", "fontStyle": "italic" }
        },
        {
            "name": "Invalid",
            "scope": ["invalid", "invalid.illegal"],
            "settings": { "foreground": "#ff5370" }
        }
    ]
}
"##;
