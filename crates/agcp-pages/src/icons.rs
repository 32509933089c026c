//! Inline SVG artwork. Every constant is trusted markup.

use agcp_content::home::PlatformIcon;
use maud::PreEscaped;

/// Three concentric rings, the brand mark.
pub const LOGO_MARK: PreEscaped<&str> = PreEscaped(
    r##"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" aria-hidden="true"><circle cx="12" cy="12" r="3" fill="#0066FF"/><circle cx="12" cy="12" r="7" stroke="#0066FF" stroke-width="1.5" fill="none" opacity="0.6"/><circle cx="12" cy="12" r="11" stroke="#0066FF" stroke-width="1" fill="none" opacity="0.3"/></svg>"##,
);

/// Check mark for bullet lists.
pub const CHECK: PreEscaped<&str> = PreEscaped(
    r#"<svg class="icon icon-check" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2" aria-hidden="true"><path d="M5 13l4 4L19 7"/></svg>"#,
);

/// Right arrow for inline calls to action.
pub const ARROW_RIGHT: PreEscaped<&str> = PreEscaped(
    r#"<svg class="icon icon-arrow" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2" aria-hidden="true"><path d="M13 7l5 5m0 0l-5 5m5-5H6"/></svg>"#,
);

/// Rising trend line.
pub const TREND_UP: PreEscaped<&str> = PreEscaped(
    r#"<svg class="icon" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2" aria-hidden="true"><path d="M13 7h8m0 0v8m0-8l-8 8-4-4-6 6"/></svg>"#,
);

/// Hamburger and close glyphs in one SVG; CSS shows one by menu state.
pub const MENU_TOGGLE: PreEscaped<&str> = PreEscaped(
    r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><path class="menu-open-glyph" d="M4 6h16M4 12h16M4 18h16"/><path class="menu-close-glyph" d="M6 6l12 12M6 18L18 6"/></svg>"#,
);

/// Envelope.
pub const MAIL: PreEscaped<&str> = PreEscaped(
    r#"<svg class="icon" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5" aria-hidden="true"><path d="M21.75 6.75v10.5a2.25 2.25 0 01-2.25 2.25h-15a2.25 2.25 0 01-2.25-2.25V6.75m19.5 0A2.25 2.25 0 0019.5 4.5h-15a2.25 2.25 0 00-2.25 2.25m19.5 0v.243a2.25 2.25 0 01-1.07 1.916l-7.5 4.615a2.25 2.25 0 01-2.36 0L3.32 8.91a2.25 2.25 0 01-1.07-1.916V6.75"/></svg>"#,
);

/// Handset.
pub const PHONE: PreEscaped<&str> = PreEscaped(
    r#"<svg class="icon" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5" aria-hidden="true"><path d="M2.25 6.75c0 8.284 6.716 15 15 15h2.25a2.25 2.25 0 002.25-2.25v-1.372c0-.516-.351-.966-.852-1.091l-4.423-1.106c-.44-.11-.902.055-1.173.417l-.97 1.293c-.282.376-.769.542-1.21.38a12.035 12.035 0 01-7.143-7.143c-.162-.441.004-.928.38-1.21l1.293-.97c.363-.271.527-.734.417-1.173L6.963 3.102a1.125 1.125 0 00-1.091-.852H4.5A2.25 2.25 0 002.25 4.5v2.25z"/></svg>"#,
);

/// Map pin.
pub const PIN: PreEscaped<&str> = PreEscaped(
    r#"<svg class="icon" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5" aria-hidden="true"><path d="M15 10.5a3 3 0 11-6 0 3 3 0 016 0z"/><path d="M19.5 10.5c0 7.142-7.5 11.25-7.5 11.25S4.5 17.642 4.5 10.5a7.5 7.5 0 1115 0z"/></svg>"#,
);

/// Dotted grid, molecule chain and particle clusters behind the home hero.
pub const HERO_BACKDROP: PreEscaped<&str> = PreEscaped(
    r##"<svg width="100%" height="100%" xmlns="http://www.w3.org/2000/svg" aria-hidden="true"><defs><pattern id="hero-grid" x="0" y="0" width="60" height="60" patternUnits="userSpaceOnUse"><circle cx="30" cy="30" r="1" fill="#0066FF" opacity="0.5"/></pattern><radialGradient id="hero-glow" cx="60%" cy="40%" r="50%"><stop offset="0%" stop-color="#0066FF" stop-opacity="0.15"/><stop offset="100%" stop-color="transparent" stop-opacity="0"/></radialGradient></defs><rect width="100%" height="100%" fill="url(#hero-grid)"/><rect width="100%" height="100%" fill="url(#hero-glow)"/><line x1="20%" y1="30%" x2="35%" y2="45%" stroke="#0066FF" stroke-width="0.5" opacity="0.3"/><line x1="35%" y1="45%" x2="50%" y2="35%" stroke="#0066FF" stroke-width="0.5" opacity="0.3"/><line x1="50%" y1="35%" x2="65%" y2="50%" stroke="#0066FF" stroke-width="0.5" opacity="0.3"/><line x1="65%" y1="50%" x2="80%" y2="40%" stroke="#0066FF" stroke-width="0.5" opacity="0.3"/><circle cx="20%" cy="30%" r="4" fill="#0066FF" opacity="0.2"/><circle cx="35%" cy="45%" r="6" fill="#0066FF" opacity="0.15"/><circle cx="50%" cy="35%" r="5" fill="#0066FF" opacity="0.2"/><circle cx="65%" cy="50%" r="4" fill="#0066FF" opacity="0.15"/><circle cx="80%" cy="40%" r="7" fill="#0066FF" opacity="0.1"/><circle cx="75%" cy="20%" r="20" stroke="#0066FF" stroke-width="0.5" fill="none" opacity="0.2"/><circle cx="75%" cy="20%" r="12" stroke="#0066FF" stroke-width="0.5" fill="none" opacity="0.3"/><circle cx="75%" cy="20%" r="4" fill="#0066FF" opacity="0.15"/><circle cx="25%" cy="70%" r="15" stroke="#0066FF" stroke-width="0.5" fill="none" opacity="0.2"/><circle cx="25%" cy="70%" r="8" stroke="#0066FF" stroke-width="0.5" fill="none" opacity="0.3"/></svg>"##,
);

/// Typical nanoparticle beside a sub-10nm droplet.
pub const PARTICLE_COMPARISON: PreEscaped<&str> = PreEscaped(
    r##"<svg viewBox="0 0 300 200" class="particle-comparison" role="img" aria-label="Particle size comparison showing AGCP's sub-10nm particles versus typical 100-200nm nanoparticles"><text x="150" y="20" text-anchor="middle" fill="#94A3B8" font-size="11">Particle Size Comparison (nm)</text><circle cx="100" cy="110" r="50" fill="#E2E8F0" stroke="#94A3B8" stroke-width="1"/><text x="100" y="115" text-anchor="middle" fill="#475569" font-size="14" font-weight="600">100-200nm</text><text x="100" y="175" text-anchor="middle" fill="#94A3B8" font-size="10">Typical Nanoparticle</text><circle cx="220" cy="110" r="8" fill="#0066FF" opacity="0.2"/><circle cx="220" cy="110" r="5" fill="#0066FF"/><text x="220" y="115" text-anchor="middle" fill="white" font-size="6" font-weight="700">&lt;10</text><text x="220" y="175" text-anchor="middle" fill="#0066FF" font-size="10" font-weight="600">AGCP Nanoemulsion</text><defs><marker id="arrowhead" markerWidth="10" markerHeight="7" refX="10" refY="3.5" orient="auto"><polygon points="0 0, 10 3.5, 0 7" fill="#0066FF"/></marker></defs><line x1="155" y1="110" x2="200" y2="110" stroke="#0066FF" stroke-width="1.5" marker-end="url(#arrowhead)"/></svg>"##,
);

const GRAPHENE: &str = r##"<svg viewBox="0 0 48 48" fill="none" class="platform-icon" aria-hidden="true"><path d="M24 4L42 14V34L24 44L6 34V14L24 4Z" stroke="#0066FF" stroke-width="1.5" fill="none"/><path d="M24 4V44M6 14L42 34M42 14L6 34" stroke="#0066FF" stroke-width="1" opacity="0.4"/><circle cx="24" cy="24" r="4" fill="#0066FF" opacity="0.2"/><circle cx="24" cy="24" r="2" fill="#0066FF"/></svg>"##;

const TRANSDERMAL: &str = r##"<svg viewBox="0 0 48 48" fill="none" class="platform-icon" aria-hidden="true"><rect x="8" y="20" width="32" height="4" rx="2" fill="#0066FF" opacity="0.15"/><circle cx="16" cy="14" r="3" fill="#0066FF" opacity="0.3"/><circle cx="28" cy="10" r="2" fill="#0066FF" opacity="0.5"/><circle cx="36" cy="16" r="2.5" fill="#0066FF" opacity="0.4"/><path d="M16 14V30M28 10V32M36 16V28" stroke="#0066FF" stroke-width="1.5" stroke-dasharray="2 2"/><circle cx="16" cy="32" r="2" fill="#0066FF"/><circle cx="28" cy="34" r="2" fill="#0066FF"/><circle cx="36" cy="30" r="2" fill="#0066FF"/></svg>"##;

const BARRIER: &str = r##"<svg viewBox="0 0 48 48" fill="none" class="platform-icon" aria-hidden="true"><circle cx="24" cy="24" r="16" stroke="#0066FF" stroke-width="1.5" fill="none"/><circle cx="24" cy="24" r="10" stroke="#0066FF" stroke-width="1" fill="none" opacity="0.5" stroke-dasharray="3 2"/><circle cx="24" cy="24" r="4" fill="#0066FF" opacity="0.2"/><circle cx="24" cy="24" r="1.5" fill="#0066FF"/><path d="M14 18L20 22M28 22L34 18M20 28L14 32M28 28L34 32" stroke="#0066FF" stroke-width="1" opacity="0.4"/></svg>"##;

/// Illustration for a platform card.
pub fn platform(icon: PlatformIcon) -> PreEscaped<&'static str> {
    PreEscaped(match icon {
        PlatformIcon::Graphene => GRAPHENE,
        PlatformIcon::Transdermal => TRANSDERMAL,
        PlatformIcon::Barrier => BARRIER,
    })
}
