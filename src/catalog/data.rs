use super::types::{
    Category, College, CollegeType, Fee, PointVector, Question, QuizOption, StreamColor,
    StreamInfo,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn option(text: &str, science: u32, commerce: u32, arts: u32, vocational: u32) -> QuizOption {
    QuizOption {
        text: text.to_string(),
        points: PointVector::new(science, commerce, arts, vocational),
    }
}

fn question(id: u32, prompt: &str, options: Vec<QuizOption>) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        options,
    }
}

pub(super) fn questions() -> Vec<Question> {
    vec![
        question(
            1,
            "What do you enjoy most during your free time?",
            vec![
                option("Solving puzzles and math problems", 5, 2, 1, 2),
                option("Reading books and writing stories", 1, 2, 5, 1),
                option("Managing pocket money and planning expenses", 1, 5, 2, 2),
                option("Building or fixing things with hands", 3, 1, 1, 5),
            ],
        ),
        question(
            2,
            "Which subject interests you the most?",
            vec![
                option("Physics and Chemistry", 5, 1, 1, 2),
                option("History and Political Science", 1, 2, 5, 1),
                option("Mathematics and Economics", 3, 5, 1, 1),
                option("Computer Science and Technology", 4, 2, 1, 5),
            ],
        ),
        question(
            3,
            "What type of career appeals to you most?",
            vec![
                option("Doctor, Engineer, Research Scientist", 5, 1, 1, 2),
                option("Teacher, Journalist, Civil Services", 2, 2, 5, 1),
                option("Banker, Chartered Accountant, Business Owner", 1, 5, 2, 2),
                option("Software Developer, Technician, Designer", 3, 2, 2, 5),
            ],
        ),
        question(
            4,
            "How do you prefer to solve problems?",
            vec![
                option("Using scientific methods and experiments", 5, 1, 2, 2),
                option("Through research and analysis", 2, 3, 5, 1),
                option("Using calculations and logical reasoning", 3, 5, 1, 2),
                option("Through practical hands-on approach", 2, 1, 1, 5),
            ],
        ),
        question(
            5,
            "What motivates you most in your studies?",
            vec![
                option("Understanding how things work in nature", 5, 1, 2, 2),
                option("Learning about people and society", 1, 2, 5, 1),
                option("Understanding money and business", 1, 5, 2, 2),
                option("Creating and building useful things", 2, 2, 2, 5),
            ],
        ),
        question(
            6,
            "Which activity would you choose for a school project?",
            vec![
                option("Science experiment or model making", 5, 1, 1, 3),
                option("Essay writing or debate preparation", 1, 2, 5, 1),
                option("Market survey and business plan", 1, 5, 2, 2),
                option("App development or technical project", 3, 2, 1, 5),
            ],
        ),
        question(
            7,
            "What type of work environment do you prefer?",
            vec![
                option("Laboratory or research facility", 5, 1, 2, 2),
                option("Library, office, or educational institution", 2, 3, 5, 1),
                option("Corporate office or financial institution", 1, 5, 2, 2),
                option("Workshop, tech company, or field work", 2, 1, 1, 5),
            ],
        ),
        question(
            8,
            "What is your approach to learning new concepts?",
            vec![
                option("Through experiments and practical observation", 5, 1, 2, 3),
                option("Reading, discussing, and critical thinking", 2, 2, 5, 1),
                option("Analyzing data and finding patterns", 3, 5, 1, 2),
                option("Learning by doing and building", 2, 1, 1, 5),
            ],
        ),
    ]
}

pub(super) fn streams() -> Vec<StreamInfo> {
    vec![
        StreamInfo {
            category: Category::Science,
            description: "Perfect for curious minds who love to explore how the world works"
                .to_string(),
            careers: strings(&[
                "Doctor",
                "Engineer",
                "Research Scientist",
                "Pharmacist",
                "Biotechnologist",
            ]),
            courses: strings(&["B.Sc", "B.Tech", "MBBS", "B.Pharmacy", "B.Sc Nursing"]),
            color: StreamColor::Primary,
        },
        StreamInfo {
            category: Category::Commerce,
            description: "Ideal for those interested in business, finance, and economic systems"
                .to_string(),
            careers: strings(&[
                "Chartered Accountant",
                "Banker",
                "Business Analyst",
                "Financial Advisor",
                "Company Secretary",
            ]),
            courses: strings(&[
                "B.Com",
                "BBA",
                "B.Com (Hons)",
                "Bachelor of Accounting",
                "Economics (Hons)",
            ]),
            color: StreamColor::Warning,
        },
        StreamInfo {
            category: Category::Arts,
            description:
                "Great for creative thinkers who want to understand society and human behavior"
                    .to_string(),
            careers: strings(&[
                "Civil Servant",
                "Teacher",
                "Journalist",
                "Lawyer",
                "Social Worker",
            ]),
            courses: strings(&[
                "B.A",
                "B.A (Hons)",
                "Bachelor of Social Work",
                "Bachelor of Journalism",
                "B.Ed",
            ]),
            color: StreamColor::Success,
        },
        StreamInfo {
            category: Category::Vocational,
            description: "Perfect for practical learners who like to build and create solutions"
                .to_string(),
            careers: strings(&[
                "Software Developer",
                "Graphic Designer",
                "Digital Marketer",
                "Technician",
                "Entrepreneur",
            ]),
            courses: strings(&[
                "BCA",
                "Diploma in IT",
                "Bachelor of Design",
                "Polytechnic",
                "Skill Development Courses",
            ]),
            color: StreamColor::Accent,
        },
    ]
}

/// Courses offered in the college picker once a stream has been chosen.
/// Narrower than the stream metadata's course list.
pub(super) fn stream_courses() -> Vec<(Category, Vec<String>)> {
    vec![
        (
            Category::Science,
            strings(&["B.Sc", "B.Tech", "MBBS", "B.Pharmacy", "B.Sc Nursing"]),
        ),
        (
            Category::Commerce,
            strings(&["B.Com", "BBA", "B.Com (Hons)", "Bachelor of Accounting"]),
        ),
        (
            Category::Arts,
            strings(&[
                "B.A",
                "B.A (Hons)",
                "Bachelor of Social Work",
                "Bachelor of Journalism",
                "B.Ed",
            ]),
        ),
        (
            Category::Vocational,
            strings(&["BCA", "Bachelor of Design", "Diploma in IT"]),
        ),
    ]
}

struct CollegeRow<'a> {
    id: u32,
    name: &'a str,
    district: &'a str,
    courses: &'a [&'a str],
    annual_fee: u64,
    facilities: &'a [&'a str],
    website: &'a str,
    established: u16,
    affiliation: &'a str,
    rating: f64,
}

impl CollegeRow<'_> {
    fn into_college(self) -> College {
        College {
            id: self.id,
            name: self.name.to_string(),
            district: self.district.to_string(),
            state: "Jammu & Kashmir".to_string(),
            college_type: CollegeType::Government,
            courses: strings(self.courses),
            fees: Fee {
                annual: self.annual_fee,
                currency: "INR".to_string(),
            },
            facilities: strings(self.facilities),
            website: self.website.to_string(),
            established: self.established,
            affiliation: self.affiliation.to_string(),
            rating: self.rating,
        }
    }
}

pub(super) fn colleges() -> Vec<College> {
    let rows = [
        CollegeRow {
            id: 1,
            name: "University of Jammu",
            district: "Jammu",
            courses: &["B.A", "B.Sc", "B.Com", "BBA", "BCA", "B.Tech", "MBBS"],
            annual_fee: 15000,
            facilities: &["Library", "Hostel", "Sports Complex", "Computer Lab", "Cafeteria"],
            website: "https://www.jammuuniversity.ac.in",
            established: 1969,
            affiliation: "UGC Recognized",
            rating: 4.2,
        },
        CollegeRow {
            id: 2,
            name: "Kashmir University",
            district: "Srinagar",
            courses: &["B.A", "B.Sc", "B.Com", "B.Tech", "MBBS", "B.Ed"],
            annual_fee: 12000,
            facilities: &["Central Library", "Hostel", "Medical Center", "Labs", "Auditorium"],
            website: "https://www.kashmiruniversity.net",
            established: 1948,
            affiliation: "UGC Recognized",
            rating: 4.1,
        },
        CollegeRow {
            id: 3,
            name: "Government Medical College, Jammu",
            district: "Jammu",
            courses: &["MBBS", "B.Sc Nursing", "B.Pharmacy"],
            annual_fee: 25000,
            facilities: &["Hospital", "Library", "Hostel", "Research Labs", "Anatomy Museum"],
            website: "https://www.gmcjammu.nic.in",
            established: 1973,
            affiliation: "MCI Approved",
            rating: 4.3,
        },
        CollegeRow {
            id: 4,
            name: "National Institute of Technology, Srinagar",
            district: "Srinagar",
            courses: &["B.Tech", "B.Sc", "BCA"],
            annual_fee: 45000,
            facilities: &["Modern Labs", "Hostel", "Sports Complex", "Library", "Wi-Fi Campus"],
            website: "https://www.nitsri.ac.in",
            established: 1960,
            affiliation: "AICTE Approved",
            rating: 4.4,
        },
        CollegeRow {
            id: 5,
            name: "Government College for Women, Srinagar",
            district: "Srinagar",
            courses: &["B.A", "B.Sc", "B.Com", "BCA"],
            annual_fee: 8000,
            facilities: &[
                "Library",
                "Computer Lab",
                "Canteen",
                "Counseling Center",
                "Career Guidance",
            ],
            website: "https://www.gcwsrinagar.edu.in",
            established: 1950,
            affiliation: "Kashmir University",
            rating: 3.9,
        },
        CollegeRow {
            id: 6,
            name: "Government College, Baramulla",
            district: "Baramulla",
            courses: &["B.A", "B.Sc", "B.Com"],
            annual_fee: 6000,
            facilities: &["Library", "Science Labs", "Sports Ground", "NSS Unit"],
            website: "https://www.gcbaramulla.edu.in",
            established: 1965,
            affiliation: "Kashmir University",
            rating: 3.7,
        },
        CollegeRow {
            id: 7,
            name: "Government Degree College, Kathua",
            district: "Kathua",
            courses: &["B.A", "B.Sc", "B.Com", "BCA"],
            annual_fee: 7000,
            facilities: &[
                "Library",
                "Computer Lab",
                "Chemistry Lab",
                "Physics Lab",
                "Playground",
            ],
            website: "https://www.gdckathua.edu.in",
            established: 1975,
            affiliation: "Jammu University",
            rating: 3.8,
        },
        CollegeRow {
            id: 8,
            name: "Cluster University of Jammu",
            district: "Jammu",
            courses: &["B.A", "B.Sc", "B.Com", "BBA", "BCA", "Bachelor of Social Work"],
            annual_fee: 10000,
            facilities: &["Modern Campus", "Digital Library", "Innovation Hub", "Student Center"],
            website: "https://www.cujammu.ac.in",
            established: 2017,
            affiliation: "UGC Recognized",
            rating: 4.0,
        },
    ];

    rows.into_iter().map(CollegeRow::into_college).collect()
}
