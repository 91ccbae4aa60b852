//! Style-class resolution — render a token set into concrete CSS.
//!
//! Output layout:
//! 1. `:root` custom properties (light base colors, ramps, font)
//! 2. `[data-theme="dark"]` override for the base colors
//! 3. element defaults (`body` font and colors)
//! 4. one utility rule per `text-*` / `bg-*` class token
//! 5. component rules for the stat card
//!
//! Rendering is deterministic: the same tokens always produce the same
//! bytes, so the generated file diffs cleanly under version control.

use std::fmt::Write;

use crate::tokens::{DesignTokens, Role, Scheme, Step, bg_class, text_class, var_name};

/// Render the complete stylesheet for a token set.
#[must_use]
pub fn render(tokens: &DesignTokens) -> String {
    let mut out = String::new();
    root_block(&mut out, tokens);
    dark_block(&mut out, tokens);
    element_defaults(&mut out);
    utility_classes(&mut out);
    component_classes(&mut out);
    layout_classes(&mut out);
    out
}

fn root_block(out: &mut String, tokens: &DesignTokens) {
    out.push_str(":root {\n");
    for (name, color) in tokens.base.entries() {
        let _ = writeln!(out, "  --color-{name}: {color};");
    }
    for role in Role::ALL {
        let ramp = tokens.ramp(role);
        for step in Step::ALL {
            let _ = writeln!(out, "  {}: {};", var_name(role, step), ramp.get(step));
        }
    }
    let _ = writeln!(out, "  --font-sans: {};", tokens.font.css_value());
    out.push_str("}\n\n");
}

fn dark_block(out: &mut String, tokens: &DesignTokens) {
    let _ = writeln!(
        out,
        "[{}=\"{}\"] {{",
        Scheme::ATTRIBUTE,
        Scheme::Dark.name()
    );
    for (name, color) in tokens.dark.entries() {
        let _ = writeln!(out, "  --color-{name}: {color};");
    }
    out.push_str("}\n\n");
}

fn element_defaults(out: &mut String) {
    out.push_str(
        "body {\n  \
           margin: 0;\n  \
           font-family: var(--font-sans);\n  \
           background: var(--color-background);\n  \
           color: var(--color-foreground);\n\
         }\n\n",
    );
}

fn utility_classes(out: &mut String) {
    for role in Role::ALL {
        for step in Step::ALL {
            let var = var_name(role, step);
            let _ = writeln!(out, ".{} {{ color: var({var}); }}", text_class(role, step));
            let _ = writeln!(
                out,
                ".{} {{ background-color: var({var}); }}",
                bg_class(role, step)
            );
        }
    }
    out.push_str(".text-muted { color: var(--color-muted); }\n\n");
}

fn component_classes(out: &mut String) {
    out.push_str(
        ".stats-card {\n  \
           display: flex;\n  \
           align-items: center;\n  \
           gap: 1rem;\n  \
           padding: 1.25rem;\n  \
           background: var(--color-surface);\n  \
           border: 1px solid var(--color-border);\n  \
           border-radius: 0.75rem;\n  \
           box-shadow: 0 1px 2px rgb(0 0 0 / 0.05);\n  \
           transition: box-shadow 0.15s ease;\n\
         }\n\
         .stats-card:hover {\n  \
           box-shadow: 0 4px 12px rgb(0 0 0 / 0.1);\n\
         }\n\
         .stats-card-icon {\n  \
           display: inline-flex;\n  \
           align-items: center;\n  \
           justify-content: center;\n  \
           width: 3rem;\n  \
           height: 3rem;\n  \
           border-radius: 9999px;\n\
         }\n\
         .stats-card-body {\n  \
           display: flex;\n  \
           flex-direction: column;\n  \
           align-items: center;\n  \
           text-align: center;\n\
         }\n\
         .stats-card-value {\n  \
           font-size: 1.5rem;\n  \
           font-weight: 700;\n\
         }\n\
         .stats-card-subtitle {\n  \
           font-size: 0.875rem;\n  \
           color: var(--color-muted);\n\
         }\n\n",
    );
}

fn layout_classes(out: &mut String) {
    out.push_str(
        ".topbar {\n  \
           display: flex;\n  \
           align-items: center;\n  \
           justify-content: space-between;\n  \
           padding: 0.75rem 1.5rem;\n  \
           background: var(--color-surface);\n  \
           border-bottom: 1px solid var(--color-border);\n\
         }\n\
         .brand {\n  \
           font-weight: 700;\n  \
           letter-spacing: 0.05em;\n\
         }\n\
         .theme-toggle {\n  \
           border: 1px solid var(--color-border);\n  \
           border-radius: 0.5rem;\n  \
           background: transparent;\n  \
           color: var(--color-foreground);\n  \
           padding: 0.25rem 0.5rem;\n  \
           cursor: pointer;\n\
         }\n\
         .page {\n  \
           max-width: 72rem;\n  \
           margin: 0 auto;\n  \
           padding: 1.5rem;\n\
         }\n\
         .stats-grid {\n  \
           display: grid;\n  \
           grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));\n  \
           gap: 1rem;\n\
         }\n\
         .not-found {\n  \
           text-align: center;\n  \
           padding: 4rem 1rem;\n\
         }\n",
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_deterministically() {
        let tokens = DesignTokens::default();
        assert_eq!(render(&tokens), render(&tokens));
    }

    #[test]
    fn should_declare_every_token_name() {
        let tokens = DesignTokens::default();
        let css = render(&tokens);
        for name in tokens.token_names() {
            assert!(css.contains(&format!("{name}:")), "missing {name}");
        }
    }

    #[test]
    fn should_emit_one_rule_per_class_token() {
        let tokens = DesignTokens::default();
        let css = render(&tokens);
        for role in Role::ALL {
            for step in Step::ALL {
                let text = format!(".{} {{", text_class(role, step));
                let bg = format!(".{} {{", bg_class(role, step));
                assert_eq!(css.matches(&text).count(), 1, "rule for {text}");
                assert_eq!(css.matches(&bg).count(), 1, "rule for {bg}");
            }
        }
    }

    #[test]
    fn should_emit_dark_scheme_override() {
        let css = render(&DesignTokens::default());
        assert!(css.contains("[data-theme=\"dark\"]"));
        // dark surface from the stock palette
        assert!(css.contains("--color-surface: #1e293b;"));
    }

    #[test]
    fn should_reference_hex_values_from_the_palette() {
        let css = render(&DesignTokens::default());
        assert!(css.contains("--color-primary-500: #3b82f6;"));
        assert!(css.contains("--color-error-900: #7f1d1d;"));
    }

    #[test]
    fn should_set_body_font_from_stack() {
        let css = render(&DesignTokens::default());
        assert!(css.contains("--font-sans: Inter, \"Segoe UI\", \"Helvetica Neue\", sans-serif;"));
        assert!(css.contains("font-family: var(--font-sans);"));
    }

    #[test]
    fn should_style_the_stat_card_shell() {
        let css = render(&DesignTokens::default());
        assert!(css.contains(".stats-card {"));
        assert!(css.contains(".stats-card:hover {"));
        assert!(css.contains(".stats-card-icon {"));
        assert!(css.contains("border-radius: 9999px;"));
    }

    #[test]
    fn should_style_the_dashboard_layout() {
        let css = render(&DesignTokens::default());
        for class in [".topbar {", ".theme-toggle {", ".stats-grid {", ".not-found {"] {
            assert!(css.contains(class), "missing {class}");
        }
    }
}
