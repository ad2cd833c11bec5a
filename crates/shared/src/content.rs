//! Static portfolio content rendered by the page.

use serde::{Deserialize, Serialize};

use crate::domain::SectionAnchor;

/// Radius, in logical pixels, of a fully mastered skill in the radial chart.
pub const SKILL_ORBIT_RADIUS: f32 = 120.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub skill_categories: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub experiences: Vec<Experience>,
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub about: String,
    pub email: String,
    pub phone: String,
    pub phone_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0..=100.
    pub level: u8,
    pub frameworks: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitPosition {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub icon: String,
    pub featured: bool,
    pub metrics: Vec<ProjectMetric>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceKind {
    Work,
    Education,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub kind: ExperienceKind,
    pub title: String,
    pub organization: String,
    pub period: String,
    pub location: String,
    pub description: String,
    pub is_freelance: bool,
    pub is_current: bool,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub anchor: SectionAnchor,
}

impl SkillCategory {
    /// Mean skill level, rounded to the nearest integer. Zero for an empty category.
    pub fn average_level(&self) -> u8 {
        if self.skills.is_empty() {
            return 0;
        }
        let total: u32 = self.skills.iter().map(|skill| u32::from(skill.level)).sum();
        (f64::from(total) / self.skills.len() as f64).round() as u8
    }

    /// Radial chart placement of each skill, relative to the chart centre.
    /// Skills are spread evenly by angle and pushed outwards by level.
    pub fn orbit_positions(&self) -> Vec<OrbitPosition> {
        let count = self.skills.len() as f32;
        self.skills
            .iter()
            .enumerate()
            .map(|(index, skill)| {
                let radians = (index as f32 * 360.0 / count).to_radians();
                let radius = f32::from(skill.level) / 100.0 * SKILL_ORBIT_RADIUS;
                OrbitPosition {
                    x: radians.cos() * radius,
                    y: radians.sin() * radius,
                }
            })
            .collect()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn skill(name: &str, level: u8, frameworks: &[&str]) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        frameworks: strings(frameworks),
    }
}

fn metric(label: &str, value: &str) -> ProjectMetric {
    ProjectMetric {
        label: label.to_string(),
        value: value.to_string(),
    }
}

pub fn nav_items() -> Vec<NavItem> {
    SectionAnchor::ALL
        .into_iter()
        .map(|anchor| NavItem {
            label: anchor.label().to_string(),
            anchor,
        })
        .collect()
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Navaneeth Sai Adapa".to_string(),
                headline: "AI Engineer & Cloud Architect".to_string(),
                about: "Passionate AI Engineer with expertise in machine learning, cloud architecture, and scalable web solutions. I specialize in building intelligent systems that solve complex problems and drive innovation in the tech industry.".to_string(),
                email: "adapanavaneethsai@gmail.com".to_string(),
                phone: "+917990000000".to_string(),
                phone_display: "+91 799xx xxxxx".to_string(),
            },
            skill_categories: vec![
                SkillCategory {
                    title: "AI & Machine Learning".to_string(),
                    skills: vec![
                        skill("Deep Learning", 90, &["TensorFlow", "PyTorch", "Keras"]),
                        skill("Natural Language Processing", 88, &["NLTK", "spaCy", "Transformers"]),
                        skill("Computer Vision", 85, &["OpenCV", "YOLO", "CNN"]),
                        skill("Generative AI", 92, &["GPT", "DALL-E", "Stable Diffusion"]),
                        skill("MLOps", 80, &["MLflow", "Kubeflow", "DVC"]),
                    ],
                },
                SkillCategory {
                    title: "Programming Languages".to_string(),
                    skills: vec![
                        skill("Python", 95, &["Django", "FastAPI", "Flask"]),
                        skill("Java", 88, &["Spring", "Hibernate", "Maven"]),
                        skill("JavaScript/TypeScript", 85, &["React", "Node.js", "Next.js"]),
                        skill("SQL", 90, &["PostgreSQL", "MySQL", "MongoDB"]),
                        skill("Go", 75, &["Gin", "Echo", "Fiber"]),
                    ],
                },
                SkillCategory {
                    title: "Cloud & Infrastructure".to_string(),
                    skills: vec![
                        skill("AWS", 88, &["EC2", "Lambda", "SageMaker"]),
                        skill("Azure", 82, &["AKS", "Functions", "ML Studio"]),
                        skill("Google Cloud", 80, &["GKE", "AI Platform", "BigQuery"]),
                        skill("Docker & Kubernetes", 85, &["Helm", "Istio", "Prometheus"]),
                        skill("Terraform", 78, &["Ansible", "CloudFormation", "Pulumi"]),
                    ],
                },
                SkillCategory {
                    title: "Web Development".to_string(),
                    skills: vec![
                        skill("Frontend", 88, &["React", "Vue.js", "Angular"]),
                        skill("Backend", 90, &["Node.js", "Express", "FastAPI"]),
                        skill("Full Stack", 87, &["MERN", "MEAN", "Django"]),
                        skill("Mobile", 75, &["React Native", "Flutter", "Ionic"]),
                        skill("DevOps", 82, &["CI/CD", "Jenkins", "GitHub Actions"]),
                    ],
                },
            ],
            projects: vec![
                Project {
                    title: "AI-Powered Health Monitoring System".to_string(),
                    description: "A comprehensive health monitoring application leveraging machine learning algorithms to predict health anomalies and provide personalized insights. Features real-time vital sign analysis, predictive modeling for early disease detection, and intelligent medication management with IoT integration.".to_string(),
                    tech_stack: strings(&["Python", "TensorFlow", "Streamlit", "SQLite", "Scikit-learn", "OpenCV", "IoT Sensors"]),
                    icon: "🏥".to_string(),
                    featured: true,
                    metrics: vec![
                        metric("accuracy", "94%"),
                        metric("users", "10K+"),
                        metric("performance", "20%"),
                    ],
                    highlights: strings(&["Real-time ML predictions", "IoT integration", "Predictive analytics"]),
                },
                Project {
                    title: "Intelligent Conversational AI Platform".to_string(),
                    description: "Advanced chat application powered by transformer models and natural language processing. Implements context-aware responses, multi-language support, sentiment analysis, and real-time learning capabilities with enterprise-grade security and scalability.".to_string(),
                    tech_stack: strings(&["React", "Node.js", "OpenAI GPT", "Socket.io", "MongoDB", "Docker", "Kubernetes"]),
                    icon: "🤖".to_string(),
                    featured: true,
                    metrics: vec![
                        metric("accuracy", "96%"),
                        metric("users", "50K+"),
                        metric("performance", "35%"),
                    ],
                    highlights: strings(&["Transformer architecture", "Multi-language NLP", "Real-time learning"]),
                },
                Project {
                    title: "Cloud-Native Infrastructure Orchestrator".to_string(),
                    description: "Sophisticated cloud management platform utilizing AI for automated resource optimization, cost prediction, and security monitoring. Features multi-cloud deployment, intelligent auto-scaling, and comprehensive analytics with machine learning-driven insights.".to_string(),
                    tech_stack: strings(&["AWS", "Terraform", "Kubernetes", "React", "TypeScript", "Prometheus", "Grafana"]),
                    icon: "☁️".to_string(),
                    featured: true,
                    metrics: vec![
                        metric("efficiency", "40%"),
                        metric("cost", "30%"),
                        metric("uptime", "99.9%"),
                    ],
                    highlights: strings(&["AI-driven optimization", "Multi-cloud support", "Predictive scaling"]),
                },
            ],
            experiences: vec![
                Experience {
                    kind: ExperienceKind::Work,
                    title: "Software Engineer".to_string(),
                    organization: "Alignerr AI".to_string(),
                    period: "Jan 2025 - Present".to_string(),
                    location: "Remote".to_string(),
                    description: "Composed and trained advanced AI models, achieving 20% performance improvement. Reviewed and optimized AI responses to enhance clarity and accuracy. Specialized in large language models and neural network architectures.".to_string(),
                    is_freelance: true,
                    is_current: true,
                    achievements: strings(&["20% performance boost", "AI model optimization", "Response quality enhancement"]),
                    technologies: strings(&["Python", "TensorFlow", "PyTorch", "Transformers"]),
                },
                Experience {
                    kind: ExperienceKind::Work,
                    title: "Programmer Analyst Trainee".to_string(),
                    organization: "Cognizant Technology Solutions".to_string(),
                    period: "July 2024 - Present".to_string(),
                    location: "Chennai, India".to_string(),
                    description: "Developing enterprise-level applications with focus on AI integration and cloud technologies. Leading cross-functional teams in implementing scalable solutions for Fortune 500 clients.".to_string(),
                    is_freelance: false,
                    is_current: true,
                    achievements: strings(&["Enterprise AI solutions", "Cloud architecture", "Team leadership"]),
                    technologies: strings(&["Java", "Spring Boot", "AWS", "Microservices"]),
                },
                Experience {
                    kind: ExperienceKind::Work,
                    title: "AI Trainer".to_string(),
                    organization: "Outlier".to_string(),
                    period: "Dec 2024 - Jul 2025".to_string(),
                    location: "Remote".to_string(),
                    description: "Developed and tested AI models by creating sophisticated prompts to uncover weaknesses and improve robustness. Achieved 30% reduction in failure rates through systematic testing methodologies.".to_string(),
                    is_freelance: true,
                    is_current: false,
                    achievements: strings(&["30% failure reduction", "Prompt engineering", "Model robustness testing"]),
                    technologies: strings(&["GPT Models", "Prompt Engineering", "Model Testing", "AI Safety"]),
                },
                Experience {
                    kind: ExperienceKind::Education,
                    title: "B.Tech in Computer Science & Engineering".to_string(),
                    organization: "Vishnu Institute of Technology".to_string(),
                    period: "2020 - 2024".to_string(),
                    location: "Bhimavaram, India".to_string(),
                    description: "Specialized in Artificial Intelligence, Machine Learning, and Software Development. Completed advanced coursework in deep learning, computer vision, and distributed systems.".to_string(),
                    is_freelance: false,
                    is_current: false,
                    achievements: strings(&["CGPA: 8.11/10", "AI Specialization", "Research Projects"]),
                    technologies: strings(&["Machine Learning", "Deep Learning", "Computer Vision", "Data Structures"]),
                },
                Experience {
                    kind: ExperienceKind::Education,
                    title: "Intermediate MPC".to_string(),
                    organization: "Pragati Junior College".to_string(),
                    period: "2018 - 2020".to_string(),
                    location: "Kakinada, India".to_string(),
                    description: "Excelled in Mathematics, Physics, and Chemistry with outstanding academic performance. Built strong foundation in analytical thinking and problem-solving.".to_string(),
                    is_freelance: false,
                    is_current: false,
                    achievements: strings(&["CGPA: 9.29/10", "Academic Excellence", "STEM Foundation"]),
                    technologies: strings(&["Mathematics", "Physics", "Chemistry", "Analytical Thinking"]),
                },
            ],
            social_links: vec![
                SocialLink {
                    name: "LinkedIn".to_string(),
                    url: "https://linkedin.com/in/navaneeth-sai-adapa".to_string(),
                },
                SocialLink {
                    name: "GitHub".to_string(),
                    url: "https://github.com/navaneethsai".to_string(),
                },
                SocialLink {
                    name: "LeetCode".to_string(),
                    url: "https://leetcode.com/navaneethsai".to_string(),
                },
                SocialLink {
                    name: "Instagram".to_string(),
                    url: "https://instagram.com/navaneethsai".to_string(),
                },
            ],
        }
    }
}
