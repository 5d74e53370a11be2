//! Generated CSS wrapped around every block.

use crate::config::TemplateConfig;

/// First line of every generated file.
pub const DEFAULTS_HEADER: &str = "/* Default Hamburger Variables */";

/// Header of the hover/active block.
pub const STATES_HEADER: &str = "/* Hover & Active States */";

/// Renders the defaults and states blocks from template values.
#[derive(Debug, Clone, Default)]
pub struct Templates {
    config: TemplateConfig,
}

impl Templates {
    pub fn new(config: TemplateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TemplateConfig {
        &self.config
    }

    /// Custom properties for thickness, color and speed, applied to the inner
    /// bar and its two pseudo-element bars. Same for every animation.
    pub fn defaults_block(&self) -> String {
        let c = &self.config;
        let host = &c.host_selector;
        format!(
            "{DEFAULTS_HEADER}
{host} {{
  --b-hamburger-layer-height: {height};       /* thickness */
  --b-hamburger-color: {color};  /* bar color */
  --b-hamburger-speed: {speed};            /* animation speed */
}}
{host} .hamburger-inner,
{host} .hamburger-inner::before,
{host} .hamburger-inner::after {{
  height: var(--b-hamburger-layer-height);
  background-color: var(--b-hamburger-color);
  transition-duration: var(--b-hamburger-speed);
}}
",
            height = c.layer_height,
            color = c.color,
            speed = c.speed,
        )
    }

    /// Hover and active opacity rules for one animation.
    pub fn states_block(&self, identifier: &str) -> String {
        let c = &self.config;
        let selector = format!(
            "{}.hamburger--{}.{}",
            c.host_selector, identifier, c.active_class
        );
        format!(
            "{STATES_HEADER}
{selector}:hover {{
  opacity: {opacity};
}}
{selector}:active {{
  opacity: {opacity};
}}
",
            opacity = c.state_opacity,
        )
    }
}

/// Join the three parts of an output file, separated by blank lines.
///
/// `defaults` and `states` are expected to end with a newline, as the
/// [`Templates`] renderers do.
pub fn compose_output(defaults: &str, segment: &str, states: &str) -> String {
    format!("{}\n{}\n\n{}", defaults, segment, states)
}
