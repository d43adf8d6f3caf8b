use std::io::Cursor;

use msharp::{
    Interpreter,
    interpreter::value::Value,
    repl::{self, InputBuffer, Submission, is_quit_command},
};

const BANNER: &str = "M# REPL\nType :quit to exit.\n";

fn session(input: &str) -> (String, String) {
    let mut interpreter = Interpreter::new(Cursor::new(input.to_string()), Vec::new());
    let mut errors = Vec::new();

    repl::run(&mut interpreter, &mut errors).expect("in-memory streams do not fail");

    (String::from_utf8(interpreter.into_output()).unwrap(), String::from_utf8(errors).unwrap())
}

#[test]
fn statement_is_ready_at_semicolon() {
    let mut buffer = InputBuffer::new();

    assert_eq!(buffer.push_line("say 1;  "), Submission::Ready("say 1;  \n".to_string()));
    assert!(buffer.is_empty());
}

#[test]
fn statement_can_span_lines() {
    let mut buffer = InputBuffer::new();

    assert_eq!(buffer.push_line("set x to do add and use"), Submission::Pending);
    assert_eq!(buffer.prompt(), repl::CONTINUATION_PROMPT);
    assert_eq!(buffer.push_line("  1, 2;"),
               Submission::Ready("set x to do add and use\n  1, 2;\n".to_string()));
    assert_eq!(buffer.prompt(), repl::PRIMARY_PROMPT);
}

#[test]
fn semicolon_inside_open_block_waits_for_close() {
    let mut buffer = InputBuffer::new();

    assert_eq!(buffer.push_line("while x {"), Submission::Pending);
    assert_eq!(buffer.push_line("{ say x; }"), Submission::Pending);
    assert_eq!(buffer.push_line("set x to do sub and use x, 1;"), Submission::Pending);
    assert!(matches!(buffer.push_line("}"), Submission::Ready(_)));
}

#[test]
fn too_many_closing_braces_discard_the_buffer() {
    let mut buffer = InputBuffer::new();

    assert_eq!(buffer.push_line("if x {"), Submission::Pending);
    assert_eq!(buffer.push_line("} }"), Submission::Unbalanced);
    assert!(buffer.is_empty());
    assert_eq!(buffer.push_line("say 2;"), Submission::Ready("say 2;\n".to_string()));
}

#[test]
fn blank_lines_do_not_start_a_statement() {
    let mut buffer = InputBuffer::new();

    assert_eq!(buffer.push_line("   "), Submission::Pending);
    assert_eq!(buffer.prompt(), repl::PRIMARY_PROMPT);
    assert_eq!(buffer.push_line("say 3;"), Submission::Ready("say 3;\n".to_string()));
}

#[test]
fn quit_commands_ignore_case_and_padding() {
    assert!(is_quit_command(":quit"));
    assert!(is_quit_command("  EXIT "));
    assert!(is_quit_command(":Quit"));
    assert!(!is_quit_command("quit"));
    assert!(!is_quit_command("exit;"));
}

#[test]
fn session_keeps_state_and_reports_failures() {
    let input = "x has value 2;\nsay x;\nsay y;\nif x {\nsay \"in\";\n}\n}\n:quit\nsay 99;\n";
    let (output, errors) = session(input);

    assert_eq!(output,
               format!("{BANNER}msharp> msharp> 2\nmsharp> msharp> ...    ...    in\nmsharp> msharp> "));
    assert_eq!(errors,
               "M# error: Undefined variable 'y'. (line 1, col 5)\nM# error: Too many closing braces.\n");
}

#[test]
fn session_ends_at_end_of_input() {
    let (output, errors) = session("say 1;");

    assert_eq!(output, format!("{BANNER}msharp> 1\nmsharp> \n"));
    assert_eq!(errors, "");
}

#[test]
fn builtins_read_from_the_session_input() {
    let (output, errors) = session("set n to do readNumber and use \"n? \";\n5\nsay n;\n");

    assert_eq!(output, format!("{BANNER}msharp> n? msharp> 5\nmsharp> \n"));
    assert_eq!(errors, "");
}

#[test]
fn quit_inside_a_pending_statement_is_ordinary_input() {
    let mut interpreter = Interpreter::new(Cursor::new("if 1 {\nexit\n}\nz has value 1;\n"),
                                           Vec::new());
    let mut errors = Vec::new();

    repl::run(&mut interpreter, &mut errors).unwrap();

    let errors = String::from_utf8(errors).unwrap();
    assert!(errors.starts_with("M# error: Undefined variable 'exit'."), "{errors}");
    assert_eq!(interpreter.environment().lookup("z"), Some(&Value::Number(1.0)));
}
