/// One named group of technical skills, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

/// The full skills taxonomy.
///
/// Slices rather than maps so the author-defined ordering survives
/// enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillsData {
    pub technical: &'static [SkillCategory],
    pub soft: &'static [&'static str],
}

pub(crate) static SKILLS: SkillsData = SkillsData {
    technical: &[
        SkillCategory {
            name: "Frontend Frameworks",
            skills: &["React", "Vue", "Angular", "Next.js"],
        },
        SkillCategory {
            name: "Languages",
            skills: &["TypeScript", "JavaScript ES6+", "HTML5", "CSS3"],
        },
        SkillCategory {
            name: "Styling",
            skills: &["SCSS", "CSS-in-JS", "Tailwind", "Material-UI"],
        },
        SkillCategory {
            name: "Tools & Testing",
            skills: &["Storybook", "Jest", "Cypress", "Webpack", "Vite"],
        },
        SkillCategory {
            name: "Concepts",
            skills: &[
                "Component Architecture",
                "Responsive Design",
                "Accessibility",
                "Performance Optimization",
            ],
        },
    ],
    soft: &[
        "Lifelong learner",
        "Systems thinker",
        "Technical writing",
        "Active listening",
        "Mentoring",
        "Cross-functional collaboration",
    ],
};
