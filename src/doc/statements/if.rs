/*!
# `IF <expression> <comparison> <expression> THEN <line number | statement>`

## Purpose
Do something contingent on a comparison.

## Remarks
The comparisons are `=`, `<>`, `<`, `<=`, `>` and `>=`.
A line number after `THEN` jumps there. Any other statement,
including another `IF`, is executed. When the comparison is
false the rest of the line is skipped.

## Example
```text
10 A = 10
20 IF A < 30 THEN PRINT A
30 A = A + 10
40 IF A < 30 THEN 20
RUN
10
20
```

*/
