pub const BODY: &str = r#"
> "This is a work-in-progress mental model I've been using to think about component design more clearly. Curious if others have found something similar helpful — or see flaws I haven't."

Maintainability isn't a single axis—it's a balance between **context independence**, **composability**, and **cognitive load**. But there's another key dimension that influences maintainability and usability in component libraries: the relationship between a component's scale and its level of opinionation.

If you were to plot all of the components in your design system on this chart, anything which falls into the overlapping areas is likely to be bending the rules in a way that causes significant maintenance overhead when changes are required as the design system progresses through its lifecycle.

---

## ⚖️ Scale vs. Opinionation Matrix

| Scale | Focus | Opinionation | Design Strategy |
|-------|-------|--------------|-----------------|
| Atomic | Broad *coverage* for use cases | 🔹 Very low | Unopinionated and flexible — think buttons, icons, checkboxes. |
| Composed | Balanced *reuse* across features | 🔸 Moderate | Sensible defaults with escape hatches — inputs, cards, menus. |
| Template | Specific *workflows* end to end | 🔴 High | Fully opinionated — entire forms, wizard steps, page shells. |

---

## 💡 Design Guidelines

🔹 **Atomic components** (e.g. `adm-btn`, `adm-icon`): keep them free of layout and workflow assumptions; their job is coverage, not opinion.

🔸 **Composed components** (e.g. `adm-form-input`): encode the common case, but leave the uncommon case reachable.

🔴 **Templates** (e.g. `user-registration-form`, `vehicle-risk-step`): be unapologetically opinionated — a template that tries to be generic is two bad components in one.

---

## 💥 When to Break the Rules

While staying within the ideal zones of the scale/opinionation matrix encourages consistency, reusability, and maintainability, real-world product development often demands flexibility. There are valid reasons to break the rules — but it's important to do so *intentionally* and with an understanding of the tradeoffs.

Here's how bending the rules in each quadrant impacts your architecture:

🔹 Bottom Left: *Ultra-Generic Atomic Components*

**Breaking the Rule**: Adding slight opinionation (e.g., default styles, layout behavior)

**When it's worth it**: when the default removes a decision every consumer was making identically anyway.

**Tradeoffs**: each opinion added narrows the component's reach and quietly couples it to a context.

**Mitigation**: make the opinion overridable, and document it as an opinion rather than a guarantee.

---

## 🌀 Long-Term Strategy

Review where components actually sit on the matrix as the system ages — drift is normal. A composed component that accretes workflow logic is a template in denial, and a template stripped for "reuse" is an atomic component with baggage. Naming the quadrant honestly is most of the battle.
"#;
