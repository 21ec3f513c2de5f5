// UI layer: onboarding prompts, the numbered menu and one handler per menu
// option. Handlers print their own outcome and return to the loop; only
// console failures propagate as errors.

use crate::console::Console;
use crate::store::CourseFile;
use crate::student::{Course, Student};
use crate::validate::{
    is_valid_course_id, is_valid_course_name, is_valid_email, is_valid_gender,
    is_valid_instructor, is_valid_name, is_valid_student_id,
};
use anyhow::Result;
use thiserror::Error;
use tracing::{info, warn};

const MENU: &[&str] = &[
    "-----Hello, We Welcome you to our program!-----",
    "-----Choose from the list below!-----",
    "1. Enroll in a course",
    "2. Remove a course",
    "3. Add a grade",
    "4. Update a grade",
    "5. View all enrolled courses",
    "6. Get GPA",
    "7. View all grades",
    "8. Exit the app",
    "--------------------------------------",
];

/// The eight menu options, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Enroll,
    RemoveCourse,
    AddGrade,
    UpdateGrade,
    ViewCourses,
    Gpa,
    ViewGrades,
    Exit,
}

impl MenuChoice {
    /// Parse a menu token; anything but an integer from 1 to 8 is `None`.
    pub fn parse(token: &str) -> Option<Self> {
        let choice = match token.trim().parse::<i64>().ok()? {
            1 => MenuChoice::Enroll,
            2 => MenuChoice::RemoveCourse,
            3 => MenuChoice::AddGrade,
            4 => MenuChoice::UpdateGrade,
            5 => MenuChoice::ViewCourses,
            6 => MenuChoice::Gpa,
            7 => MenuChoice::ViewGrades,
            8 => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

/// Which course field failed validation while enrolling.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidCourse {
    #[error("invalid course name")]
    Name,
    #[error("invalid course ID")]
    Id,
    #[error("invalid instructor name")]
    Instructor,
}

/// Ask for name, email, student ID, age and gender. Any bad answer
/// restarts the whole sequence from the name.
pub fn get_student<C: Console>(console: &mut C) -> Result<Student> {
    loop {
        let name = console.read_token("Enter your full name")?;
        if !is_valid_name(&name) {
            console.say("Name is invalid!")?;
            continue;
        }

        let email = console.read_token("Enter email")?;
        if !is_valid_email(&email) {
            console.say("Email is invalid!")?;
            continue;
        }

        let student_id = console.read_token("Enter your student ID")?;
        if !is_valid_student_id(&student_id) {
            console.say("Student ID is invalid!")?;
            continue;
        }

        let Ok(age) = console.read_token("Enter your age")?.trim().parse::<i64>() else {
            console.say("Age must be a number")?;
            continue;
        };

        let gender = console.read_token("Enter your gender")?;
        if !is_valid_gender(&gender) {
            console.say("Gender is invalid!")?;
            continue;
        }

        info!(%student_id, "student onboarded");
        return Ok(Student::new(name, email, student_id, age, gender));
    }
}

/// Print the menu and read one choice. Invalid input is reported here and
/// comes back as `None`.
pub fn show_menu<C: Console>(console: &mut C) -> Result<Option<MenuChoice>> {
    for line in MENU {
        console.say(line)?;
    }
    let token = console.read_token("Choose from 1 - 8")?;
    let choice = MenuChoice::parse(&token);
    if choice.is_none() {
        console.say("Ops! Invalid choice! Choose from 1 - 8.")?;
    }
    Ok(choice)
}

/// Main loop. Runs until the user picks "Exit".
pub fn run_app<C: Console>(student: &mut Student, console: &mut C, store: &CourseFile) -> Result<()> {
    loop {
        let Some(choice) = show_menu(console)? else {
            continue;
        };
        match choice {
            MenuChoice::Enroll => add_course(student, console, store)?,
            MenuChoice::RemoveCourse => remove_course(student, console)?,
            MenuChoice::AddGrade => set_grade(student, console, GradeAction::Add)?,
            MenuChoice::UpdateGrade => set_grade(student, console, GradeAction::Update)?,
            MenuChoice::ViewCourses => print_courses(student, console)?,
            MenuChoice::Gpa => print_gpa(student, console)?,
            MenuChoice::ViewGrades => print_grades(student, console)?,
            MenuChoice::Exit => {
                console.say("You exited the app")?;
                return Ok(());
            }
        }
    }
}

/// Prompt for the three course fields, stopping at the first invalid one.
/// The outer error is a console failure, the inner one a rejected field.
fn read_course<C: Console>(console: &mut C) -> Result<Result<Course, InvalidCourse>> {
    let course_name = console.read_token("Enter course name")?;
    if !is_valid_course_name(&course_name) {
        return Ok(Err(InvalidCourse::Name));
    }

    let course_id = console.read_token("Enter course ID")?;
    if !is_valid_course_id(&course_id) {
        return Ok(Err(InvalidCourse::Id));
    }

    let instructor = console.read_token("Enter instructor's name")?;
    if !is_valid_instructor(&instructor) {
        return Ok(Err(InvalidCourse::Instructor));
    }

    Ok(Ok(Course::new(course_id, course_name, instructor)))
}

fn add_course<C: Console>(student: &mut Student, console: &mut C, store: &CourseFile) -> Result<()> {
    let course = match read_course(console)? {
        Ok(course) => course,
        Err(invalid) => return console.say(&invalid.to_string()),
    };

    // The file is a side trail; a failed write never blocks enrollment.
    if let Err(e) = store.append(&course) {
        warn!(error = %e, "could not save course");
        console.say(&format!("Ops! failed to write to file: {}", e))?;
    }
    student.enroll(course);
    Ok(())
}

fn remove_course<C: Console>(student: &mut Student, console: &mut C) -> Result<()> {
    if student.courses().is_empty() {
        return console.say("No courses enrolled");
    }

    let course_id = console.read_token("Enter the ID of the course you want to remove")?;
    match student.remove_course(&course_id) {
        Ok(_) => console.say(&format!("Course with ID {} removed!", course_id)),
        Err(e) => console.say(&e.to_string()),
    }
}

#[derive(Clone, Copy)]
enum GradeAction {
    Add,
    Update,
}

fn set_grade<C: Console>(student: &mut Student, console: &mut C, action: GradeAction) -> Result<()> {
    let prompt = match action {
        GradeAction::Add => "Enter the course ID to add grade",
        GradeAction::Update => "Enter the course ID to update grade",
    };
    let course_id = console.read_token(prompt)?;

    let Ok(grade) = console.read_token("Enter the new grade")?.trim().parse::<i64>() else {
        return console.say("Grade must be a number");
    };

    match student.set_grade(&course_id, grade) {
        Ok(()) => {
            let message = match action {
                GradeAction::Add => format!("Grade {} added to course {}", grade, course_id),
                GradeAction::Update => format!("Grade updated to {} for course {}", grade, course_id),
            };
            console.say(&message)
        }
        Err(e) => console.say(&e.to_string()),
    }
}

fn print_courses<C: Console>(student: &Student, console: &mut C) -> Result<()> {
    if student.courses().is_empty() {
        return console.say("No course enrolled");
    }
    for course in student.courses() {
        console.say(&course.course_name)?;
    }
    Ok(())
}

fn print_gpa<C: Console>(student: &Student, console: &mut C) -> Result<()> {
    match student.gpa() {
        Some(gpa) => console.say(&format!("Your GPA: {:.2}", gpa)),
        None => console.say("No grades recorded"),
    }
}

/// Grades are listed in ascending course-ID order.
fn print_grades<C: Console>(student: &Student, console: &mut C) -> Result<()> {
    if student.grades().is_empty() {
        return console.say("No grades recorded");
    }
    for (course_id, grade) in student.grades() {
        console.say(&format!("Course ID: {}, Grade: {}", course_id, grade))?;
    }
    Ok(())
}
