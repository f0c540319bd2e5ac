pub const BODY: &str = r#"
> "Stop enforcing consistency manually. Start teaching it through examples. This is my framework for thinking about exemplar-driven architecture and self-improving design systems."

Traditional design systems are rigid, rule-bound, and manually enforced. But what if consistency wasn't enforced — but **learned**? This approach introduces a **virtuous cycle of architectural refinement**:

```
Human creates exemplar → AI generates variants → Human refines → AI learns patterns → Better generation
```

Where traditional design systems become brittle and bloated over time, a generative design system **gets smarter** — improving with every use, rather than decaying under complexity.

---

## 🏗️ Core Components

### 1. The Exemplar Layer (Human-Crafted)

A curated "kitchen sink" file like `ArticleExemplar.tsx` serves as the architectural north star:

```
ArticleExemplar.tsx
├── Hero variations
├── Content block patterns
├── Sidebar configurations
├── Footer arrangements
├── Interactive elements
└── Edge case handling
```

It demonstrates every intended composition, from typical use cases to stylistic and structural edge cases.

### 2. The Generation Layer (AI-Driven)

This layer references the exemplar to:

- Generate new pages and components that match established patterns
- Respect spacing, naming, and composition conventions
- Extend the system without fragmenting it

Over time, the AI begins to predict and respect your team's idioms and stack-specific preferences.

### 3. The Content Layer (Data-Driven)

Content — whether structured (JSON), semi-structured (markdown), or freeform (text) — flows into the system and is formatted according to learned patterns. The result:

- Authors focus on *what* to say
- The system decides *how* it should look

---

## 🔄 The Self-Improving Mechanism

Every generation-refinement cycle teaches the system something new:

1. A human crafts or corrects an exemplar
2. The AI generates variants against it
3. Refinements feed back into the exemplar set
4. The next generation starts from a better baseline

This feedback loop allows the system to grow *with* your codebase.

---

## 💡 Why It Matters

- ⚡ **Lower Cognitive Load**: developers stop memorizing rules and start pointing at examples.
- 🔄 **Built-in Consistency**: every generated artifact inherits the exemplar's conventions.
- 📈 **Scalable by Default**: the system absorbs new patterns instead of fighting them.

---

## 🛠️ Implementation Considerations

**Exemplar Design** — exemplars must be curated, not accumulated; a bloated exemplar teaches bloat.

**Training Data Quality** — refinements are signal; unreviewed output fed back in is noise.

**Guardrails and Boundaries** — generation should be free within the exemplar's vocabulary and constrained outside it.

---

## 🚀 The Long-Term Vision

This approach reframes frontend development: the design system stops being a rulebook you enforce and becomes a body of examples you teach from. Consistency becomes an emergent property of the feedback loop — not a policing exercise.
"#;
