use std::cell::RefCell;

use azeng::{
    interpreter::{
        http::{HttpClient, HttpMethod, HttpResponse},
        lexer::lex,
        output::OutputSink,
    },
    run_program,
};

struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    fn new() -> Self {
        Self { lines: Vec::new() }
    }
}

impl OutputSink for MemorySink {
    fn write_line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

/// Every request fails at the transport.
struct FailingHttp;

impl HttpClient for FailingHttp {
    fn perform(&self, _method: HttpMethod, _url: &str, _body: Option<&str>) -> HttpResponse {
        HttpResponse { status_ok: false,
                       body:      String::new(), }
    }
}

/// Answers every request with a canned body and records what was asked.
struct CannedHttp {
    body: String,
    requests: RefCell<Vec<(HttpMethod, String, Option<String>)>>,
}

impl CannedHttp {
    fn new(body: &str) -> Self {
        Self { body: body.to_string(),
               requests: RefCell::new(Vec::new()), }
    }
}

impl HttpClient for CannedHttp {
    fn perform(&self, method: HttpMethod, url: &str, body: Option<&str>) -> HttpResponse {
        self.requests
            .borrow_mut()
            .push((method, url.to_string(), body.map(str::to_string)));

        HttpResponse { status_ok: true,
                       body:      self.body.clone(), }
    }
}

fn run_capturing(src: &str) -> Vec<String> {
    let mut out = MemorySink::new();
    if let Err(e) = run_program(src, &FailingHttp, &mut out) {
        panic!("Script failed: {e}");
    }

    out.lines
}

fn assert_output(src: &str, expected: &[&str]) {
    assert_eq!(run_capturing(src), expected);
}

fn assert_failure(src: &str) {
    let mut out = MemorySink::new();
    if run_program(src, &FailingHttp, &mut out).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn printing_and_sequencing() {
    assert_output(r#"bikin fungsi utama() { cetak("halo"); }"#, &["halo"]);
    assert_output("bikin fungsi utama() { isi x = 5; x = x + 1; cetak(x); }",
                  &["6"]);
}

#[test]
fn binary_chains_group_to_the_right() {
    assert_output("bikin fungsi utama() { isi a = 10 - 2 - 3; cetak(a); }",
                  &["11"]);
    assert_output("bikin fungsi utama() { isi a = 1 + 2 + 3; cetak(a); }",
                  &["6"]);
}

#[test]
fn conditional_runs_body_only_when_it_holds() {
    let taken = r#"
        bikin fungsi utama() {
            isi x = 5;
            kalo (x > 3) { cetak("ya"); }
            cetak("selesai");
        }
    "#;
    assert_output(taken, &["ya", "selesai"]);

    let skipped = r#"
        bikin fungsi utama() {
            isi x = 2;
            kalo (x > 3) { cetak("ya"); }
            cetak("selesai");
        }
    "#;
    assert_output(skipped, &["selesai"]);
}

#[test]
fn loop_runs_until_condition_fails() {
    let src = r"
        bikin fungsi utama() {
            isi i = 0;
            ulang (i < 3) {
                cetak(i);
                i = i + 1;
            }
        }
    ";
    assert_output(src, &["0", "1", "2"]);
}

#[test]
fn out_of_range_array_write_mutates_nothing() {
    let src = r"
        bikin fungsi utama() {
            isi arr = array[3];
            arr[5] = 9;
            cetak(arr);
        }
    ";
    assert_output(src, &["[0, 0, 0]"]);
}

#[test]
fn out_of_range_array_read_is_void() {
    let src = r"
        bikin fungsi utama() {
            isi arr = array[3];
            cetak(arr[5]);
        }
    ";
    assert_output(src, &["void"]);
}

#[test]
fn negative_array_index_read_is_void() {
    let src = r"
        bikin fungsi utama() {
            isi arr = array[3];
            cetak(arr[0 - 1]);
        }
    ";
    assert_output(src, &["void"]);
}

#[test]
fn negative_array_index_write_mutates_nothing() {
    let src = r"
        bikin fungsi utama() {
            isi arr = array[3];
            arr[0 - 1] = 9;
            cetak(arr);
        }
    ";
    assert_output(src, &["[0, 0, 0]"]);
}

#[test]
fn array_elements_read_back_as_scalars() {
    let src = r"
        bikin fungsi utama() {
            isi arr = array[3];
            arr[0] = 10;
            isi x = arr[0] + 1;
            cetak(x);
        }
    ";
    assert_output(src, &["11"]);
}

#[test]
fn array_element_kind_suffix() {
    assert_output("bikin fungsi utama() { isi s = array[2]: str; cetak(s); }",
                  &["[, ]"]);
    assert_output("bikin fungsi utama() { isi b = array[2]: bool; cetak(b); }",
                  &["[salah, salah]"]);
}

#[test]
fn mismatched_array_element_write_is_ignored() {
    let src = r#"
        bikin fungsi utama() {
            isi arr = array[2];
            arr[0] = "teks";
            cetak(arr);
        }
    "#;
    assert_output(src, &["[0, 0]"]);
}

#[test]
fn builtin_type_mismatch_absorbs_to_void() {
    assert_output(r#"bikin fungsi utama() { cetak(gabung(1, "a")); }"#, &["void"]);
    assert_output("bikin fungsi utama() { cetak(bagi(10, 4)); }", &["void"]);
}

#[test]
fn builtin_arithmetic_and_comparison() {
    assert_output("bikin fungsi utama() { cetak(tambah(2, 3)); }", &["5"]);
    assert_output("bikin fungsi utama() { cetak(bagi(10.0, 4.0)); }",
                  &["2.500000"]);
    assert_output("bikin fungsi utama() { cetak(lebih_besar(3, 2)); }",
                  &["benar"]);
    assert_output(r#"bikin fungsi utama() { cetak(gabung("a", "b")); }"#, &["ab"]);
}

#[test]
fn operator_type_rules() {
    assert_output("bikin fungsi utama() { cetak(7 / 2); }", &["3"]);
    assert_output("bikin fungsi utama() { cetak(7 / 0); }", &["void"]);
    assert_output(r#"bikin fungsi utama() { cetak("a" + "b"); }"#, &["ab"]);
    assert_output("bikin fungsi utama() { cetak(1 + 1.5); }", &["void"]);
    assert_output("bikin fungsi utama() { cetak(1.5 + 2.5); }", &["4.000000"]);
}

#[test]
fn string_escapes_are_interpreted_at_evaluation() {
    assert_output(r#"bikin fungsi utama() { cetak("a\nb"); }"#, &["a\nb"]);
    assert_output(r#"bikin fungsi utama() { cetak("kolom\takhir"); }"#,
                  &["kolom\takhir"]);
    assert_output(r#"bikin fungsi utama() { cetak("a\qb"); }"#, &["a\\qb"]);
}

#[test]
fn structured_response_bodies_are_indented() {
    let http = CannedHttp::new(r#"{"nama": "Azeng", "umur": 1}"#);
    let mut out = MemorySink::new();
    let src = r#"
        bikin fungsi utama() {
            isi r = http_get("http://contoh.id/data");
            cetak(r);
        }
    "#;
    run_program(src, &http, &mut out).unwrap();

    assert_eq!(out.lines, &["{\n  \"nama\": \"Azeng\",\n  \"umur\": 1\n}"]);
}

#[test]
fn failed_http_request_does_not_abort_the_run() {
    let src = r#"
        bikin fungsi utama() {
            isi r = http_get("http://contoh.id/data");
            cetak(r);
            cetak("lanjut");
        }
    "#;
    assert_output(src, &["void", "lanjut"]);
}

#[test]
fn http_post_forwards_url_and_body() {
    let http = CannedHttp::new("ok");
    let mut out = MemorySink::new();
    let src = r#"
        bikin fungsi utama() {
            isi r = http_post("http://contoh.id/kirim", "data=1");
            cetak(r);
        }
    "#;
    run_program(src, &http, &mut out).unwrap();

    assert_eq!(out.lines, &["ok"]);
    let requests = http.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0],
               (HttpMethod::Post,
                "http://contoh.id/kirim".to_string(),
                Some("data=1".to_string())));
}

#[test]
fn undeclared_variable_read_is_fatal() {
    assert_failure("bikin fungsi utama() { isi y = x + 1; }");
}

#[test]
fn variable_capacity_is_bounded() {
    let mut body = String::new();
    for i in 0..=100 {
        body.push_str(&format!("isi v{i} = {i}; "));
    }
    assert_failure(&format!("bikin fungsi utama() {{ {body} }}"));

    let mut body = String::new();
    for i in 0..100 {
        body.push_str(&format!("isi v{i} = {i}; "));
    }
    let mut out = MemorySink::new();
    let src = format!("bikin fungsi utama() {{ {body} }}");
    assert!(run_program(&src, &FailingHttp, &mut out).is_ok());
}

#[test]
fn non_boolean_loop_condition_is_fatal() {
    assert_failure("bikin fungsi utama() { ulang (1) { cetak(1); } }");
}

#[test]
fn conditional_shape_is_restricted() {
    assert_failure(r#"bikin fungsi utama() { isi x = 1; kalo (x < 3) { cetak("a"); } }"#);
    assert_failure(r#"bikin fungsi utama() { kalo (2 > 1) { cetak("a"); } }"#);
}

#[test]
fn reserved_keywords_fail_as_statements() {
    assert_failure(r#"bikin fungsi utama() { maka cetak("a"); }"#);
}

#[test]
fn missing_semicolon_is_fatal() {
    assert_failure("bikin fungsi utama() { isi x = 1 }");
}

#[test]
fn scan_stops_at_unknown_byte() {
    assert_failure("bikin fungsi utama() { isi x @ cetak }");
}

#[test]
fn scan_stops_at_unterminated_string() {
    assert_failure(r#"bikin fungsi utama() { isi x = "tanpa akhir; }"#);
}

#[test]
fn return_is_a_no_op() {
    let src = r#"
        bikin fungsi utama() {
            kembali 5;
            cetak("setelah");
        }
    "#;
    assert_output(src, &["setelah"]);

    // The returned expression is not evaluated.
    let src = r#"
        bikin fungsi utama() {
            kembali tidak_ada;
            cetak("ok");
        }
    "#;
    assert_output(src, &["ok"]);
}

#[test]
fn function_bodies_run_once_in_declaration_order() {
    let src = r#"
        bikin fungsi pertama() { cetak("1"); }
        fungsi_int kedua(n: int) { cetak("2"); }
        fungsi ketiga() { cetak("3"); }
    "#;
    assert_output(src, &["1", "2", "3"]);
}

#[test]
fn parameters_are_never_bound() {
    let src = r#"
        fungsi_int dengan_param(n: int) { cetak("badan"); }
    "#;
    assert_output(src, &["badan"]);

    // Reading the parameter name is an unknown-variable error.
    assert_failure("fungsi_int dengan_param(n: int) { cetak(n); }");
}

#[test]
fn variables_are_shared_across_functions() {
    let src = r#"
        bikin fungsi siapkan() { isi x = 7; }
        bikin fungsi pakai() { cetak(x); }
    "#;
    assert_output(src, &["7"]);
}

#[test]
fn scanning_is_deterministic() {
    let src = include_str!("example.az");
    assert_eq!(lex(src), lex(src));
}

#[test]
fn example_script_runs() {
    let src = include_str!("example.az");
    assert_output(src, &["Halo, Azeng", "0", "1", "2", "[10, 20, 0]"]);
}
