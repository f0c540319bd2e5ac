/// One position in the work history, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkExperience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

pub(crate) static EXPERIENCE: &[WorkExperience] = &[
    WorkExperience {
        company: "Etch",
        role: "Frontend Developer",
        period: "2022 - Present",
        description: "Building and maintaining component libraries, transforming Figma designs into production-ready code.",
        highlights: &[
            "Developed reusable component systems used across multiple projects",
            "Collaborated with designers to ensure pixel-perfect implementations",
            "Improved build times by 40% through optimization strategies",
            "Mentored junior developers on React best practices",
        ],
    },
    WorkExperience {
        company: "Previous Company",
        role: "UI Developer",
        period: "2020 - 2022",
        description: "Focused on creating responsive, accessible web applications for e-commerce platforms.",
        highlights: &[
            "Built custom checkout flows that increased conversion by 25%",
            "Implemented A/B testing framework for UI experiments",
            "Led migration from legacy jQuery to modern React architecture",
            "Established coding standards and review processes",
        ],
    },
    WorkExperience {
        company: "Freelance",
        role: "Web Developer",
        period: "2018 - 2020",
        description: "Worked with various clients to deliver custom web solutions and user interfaces.",
        highlights: &[
            "Delivered 15+ projects on time and within budget",
            "Specialized in responsive design and performance optimization",
            "Built relationships with clients leading to repeat business",
            "Managed full project lifecycle from concept to deployment",
        ],
    },
];
