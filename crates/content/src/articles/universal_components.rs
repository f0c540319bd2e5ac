pub const BODY: &str = r#"
## The Illusion of Universality

In modern component systems, we're taught to prize DRY reusable code above all else.

The ideal component, we're told, is flexible, generic, and universally applicable, it's totally context independent and able to be dropped into any layout, any theme, any interaction flow.

But this ideal often leads us down a path of brittle abstractions and hidden assumptions. Behind the clean surface of a "universal" component lies a tangle of implicit context: layout expectations, accessibility obligations, theming dependencies, and behavioural quirks.

When those assumptions go unmet, we're left debugging subtle failures that only appear when components are used "incorrectly".

This is the illusion of universality: the belief that components can work everywhere, when in truth, they were only ever designed to work somewhere, within some unspoken bounded context.

---

## 🧩 Bounded Context Components – Compatibility Summary

### ✅ Core Idea

Components can belong to **multiple contexts**, each defining a set of behavioural guarantees.

**Contextual compatibility** becomes a **metric of flexibility and composability**, not just correctness.

### 🔁 Components & Context Compatibility

- Components can **declare compatibility** with various contexts.
- Contexts define **constraints, guarantees, and concerns** (e.g., FormContext, LayoutContext, ThemeContext, TypographicContext).
- Components adapt behavior based on active context(s).

Example Compatibility Table

| Component | Compatible Contexts |
|-----------|---------------------|
| Button    | Form, Layout, Action |
| Card      | Layout, Theme, Shadow |
| Tooltip   | Interaction, Accessibility |

---

## 📊 Compatibility as a First-Class Metric

### 1. Declarative Compatibility

```js
Button.compatibility = {
  FormContext: 'full',
  LayoutContext: 'partial',
  PresentationalContext: 'none'
};
```

### 2. Context-Aware Linting

**Example warning:** "<Tooltip> used in <FormContext> without a focusable trigger."

### 3. Progressive Hardening

- **Phase 1** → Permissive composition (no enforcement)
- **Phase 2** → Log actual usage/mismatches for observability
- **Phase 3** → Require explicit compatibility declarations and tooling support

---

## 🧠 Mental Model Shift

- **Old mindset**: "Can I use this here?"
- **New mindset**: "What does this component guarantee in this context?"

## ✅ Benefits

| Benefit | Description |
|---------|-------------|
| 🔄 Reusability | Adapt components to different use cases without rewriting |
| 📋 Auditability | Understand and visualize where components are safe to use |
| 🎯 Consistency | Improve consistency without rigidity |
| 🛡️ Integrity | Encourage reuse while protecting system integrity |
"#;
