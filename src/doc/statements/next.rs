/*!
# `NEXT <variable>`
Also see `FOR`

## Purpose
Used to indicate the end of a `FOR` loop.

## Remarks
The variable must match the innermost `FOR`, otherwise
`NEXT WITHOUT FOR` stops the program. When the loop finishes
the variable keeps its last stepped value.

## Example
```text
10 FOR I = 1 TO 3
20 NEXT I
30 PRINT I
RUN
4
```

*/
